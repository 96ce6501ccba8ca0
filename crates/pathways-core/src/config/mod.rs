//! Configuration system for the pathways matcher.
//! TOML-based, layered resolution: env > project > defaults.

pub mod graph_config;
pub mod matcher_config;
pub mod pathways_config;

pub use graph_config::GraphConfig;
pub use matcher_config::MatcherConfig;
pub use pathways_config::PathwaysConfig;
