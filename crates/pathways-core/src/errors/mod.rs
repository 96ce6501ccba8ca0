//! Error handling for the pathways matcher.
//! One error enum per subsystem, `thiserror` only.
//!
//! The matching layer itself never fails: unknown ids and missing attributes
//! simply fail a predicate. Errors surface only while loading data,
//! configuration, or triage answers.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod profile_error;

pub use config_error::ConfigError;
pub use error_code::PathwaysErrorCode;
pub use graph_error::{GraphError, GraphResult};
pub use profile_error::ProfileError;
