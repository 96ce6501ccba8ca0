//! Top-level pathways configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GraphConfig, MatcherConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PATHWAYS_*`)
/// 2. Project config (`pathways.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathwaysConfig {
    pub graph: GraphConfig,
    pub matcher: MatcherConfig,
}

impl PathwaysConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PathwaysConfig) -> Result<(), ConfigError> {
        if let Some(ref id) = config.matcher.fallback_node_id {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "matcher.fallback_node_id".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config
            .matcher
            .transfer_bridge_ids
            .iter()
            .any(|id| id.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "matcher.transfer_bridge_ids".to_string(),
                message: "ids must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PathwaysConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PathwaysConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it sets a value.
    fn merge(base: &mut PathwaysConfig, other: &PathwaysConfig) {
        if other.graph.reject_cycles.is_some() {
            base.graph.reject_cycles = other.graph.reject_cycles;
        }

        if other.matcher.fallback_node_id.is_some() {
            base.matcher.fallback_node_id = other.matcher.fallback_node_id.clone();
        }
        if !other.matcher.transfer_bridge_ids.is_empty() {
            base.matcher.transfer_bridge_ids = other.matcher.transfer_bridge_ids.clone();
        }
        if !other.matcher.required_fields.is_empty() {
            base.matcher.required_fields = other.matcher.required_fields.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PATHWAYS_GRAPH_REJECT_CYCLES`, `PATHWAYS_MATCHER_FALLBACK_NODE_ID`.
    fn apply_env_overrides(config: &mut PathwaysConfig) {
        if let Ok(val) = std::env::var("PATHWAYS_GRAPH_REJECT_CYCLES") {
            if let Ok(v) = val.parse::<bool>() {
                config.graph.reject_cycles = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PATHWAYS_MATCHER_FALLBACK_NODE_ID") {
            config.matcher.fallback_node_id = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
