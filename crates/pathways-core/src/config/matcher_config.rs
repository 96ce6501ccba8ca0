//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FALLBACK_NODE_ID, DEFAULT_TRANSFER_BRIDGE_ID};
use crate::models::ProfileField;

/// Configuration for profile matching and activation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Node presented alone when nothing matches. Default: "general-overview".
    pub fallback_node_id: Option<String>,
    /// Bridge nodes transfer students may reach whatever their kind.
    /// Default: ["transfer-bridge"].
    #[serde(default)]
    pub transfer_bridge_ids: Vec<String>,
    /// Questions that must be answered before a profile counts as complete.
    #[serde(default)]
    pub required_fields: Vec<ProfileField>,
}

impl MatcherConfig {
    pub fn effective_fallback_node_id(&self) -> &str {
        self.fallback_node_id
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_NODE_ID)
    }

    pub fn effective_transfer_bridge_ids(&self) -> Vec<String> {
        if self.transfer_bridge_ids.is_empty() {
            vec![DEFAULT_TRANSFER_BRIDGE_ID.to_string()]
        } else {
            self.transfer_bridge_ids.clone()
        }
    }

    pub fn effective_required_fields(&self) -> Vec<ProfileField> {
        if self.required_fields.is_empty() {
            ProfileField::DEFAULT_REQUIRED.to_vec()
        } else {
            self.required_fields.clone()
        }
    }
}
