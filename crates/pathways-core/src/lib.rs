//! # pathways-core
//!
//! Foundation crate for the pathways matcher.
//! Defines the graph data model, triage profile, errors, config, and constants.
//! The engine crate depends on this for every shared type.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PathwaysConfig;
pub use errors::{ConfigError, GraphError, GraphResult, PathwaysErrorCode, ProfileError};
pub use models::{
    ActivationResult, Category, DegreeLevel, GradSpotlight, HoverHighlight, Job, MatchedProgram,
    NodeData, NodeType, PathwayDataset, PathwayEdge, PathwayNode, Preference, Profile,
    ProfileField, ProgramKind, ProgramMatch, Stage, StartingPoint,
};
