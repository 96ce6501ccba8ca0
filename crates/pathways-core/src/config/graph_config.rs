//! Graph loading configuration.

use serde::{Deserialize, Serialize};

/// Configuration for dataset validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Treat a cyclic dataset as invalid. Default: false.
    ///
    /// Traversal terminates on cycles either way; this only guards datasets
    /// that are meant to flow strictly left to right.
    pub reject_cycles: Option<bool>,
}

impl GraphConfig {
    /// Returns the effective cycle policy, defaulting to false.
    pub fn effective_reject_cycles(&self) -> bool {
        self.reject_cycles.unwrap_or(false)
    }
}
