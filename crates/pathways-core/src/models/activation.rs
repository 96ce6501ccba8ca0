//! Derived, never-persisted results handed to the renderer.

use serde::{Deserialize, Serialize};

use super::node::ProgramKind;
use crate::types::collections::IdSet;

/// Nodes and edges relevant to the current profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResult {
    pub active_node_ids: IdSet,
    pub active_edge_ids: IdSet,
    /// Nothing matched: surface a call to action for a human advisor.
    pub show_advisor: bool,
}

impl ActivationResult {
    /// The neutral state: nothing highlighted.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active_node_ids.is_empty() && self.active_edge_ids.is_empty()
    }

    pub fn is_node_active(&self, id: &str) -> bool {
        self.active_node_ids.contains(id)
    }

    pub fn is_edge_active(&self, id: &str) -> bool {
        self.active_edge_ids.contains(id)
    }
}

/// Hovered node's chain, restricted to complete entry-to-outcome paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverHighlight {
    pub node_ids: IdSet,
    pub edge_ids: IdSet,
}

impl HoverHighlight {
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }
}

/// One program in the matched list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedProgram {
    pub id: String,
    pub label: String,
    pub kind: Option<ProgramKind>,
    /// Explicitly serves a declared interest or readiness level.
    pub recommended: bool,
}

/// Programs matching a profile, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMatch {
    pub programs: Vec<MatchedProgram>,
    pub show_advisor: bool,
}

impl ProgramMatch {
    pub fn ids(&self) -> Vec<&str> {
        self.programs.iter().map(|p| p.id.as_str()).collect()
    }
}
