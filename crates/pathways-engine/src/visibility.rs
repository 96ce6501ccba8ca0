//! Per-node and per-edge display state for a renderer.

use pathways_core::models::{ActivationResult, Category, HoverHighlight, PathwayNode};
use serde::{Deserialize, Serialize};

use crate::graph::GraphStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// No activation: everything is shown evenly.
    Neutral,
    Active,
    Dimmed,
    /// Focus mode hides inactive nodes.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeState {
    Neutral,
    Active,
    /// On the hovered node's entry-to-outcome chain. Wins over `Active`.
    Hovered,
    Dimmed,
    Hidden,
}

/// Renderer toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewOptions {
    pub focus_mode: bool,
    /// Legend filter; empty shows every category.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub state: NodeState,
    /// Outside the legend filter.
    pub filtered_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeView {
    pub id: String,
    pub state: EdgeState,
    /// Leads into an add-on credential (minor, microcredential, grad
    /// certificate) rather than a main program.
    pub optional: bool,
}

/// Display state for the whole graph, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphView {
    pub fn classify(
        store: &GraphStore,
        activation: &ActivationResult,
        hover: Option<&HoverHighlight>,
        options: &ViewOptions,
    ) -> Self {
        let activated = !activation.active_node_ids.is_empty();
        let hide_inactive = options.focus_mode && activated;

        let nodes = store
            .nodes()
            .map(|node| {
                let filtered_out = !options.categories.is_empty()
                    && !options.categories.contains(&node.category());
                let state = if !activated {
                    if filtered_out {
                        NodeState::Dimmed
                    } else {
                        NodeState::Neutral
                    }
                } else if activation.is_node_active(&node.id) {
                    NodeState::Active
                } else if hide_inactive {
                    NodeState::Hidden
                } else {
                    NodeState::Dimmed
                };
                NodeView {
                    id: node.id.clone(),
                    state,
                    filtered_out,
                }
            })
            .collect();

        let edges = store
            .edges()
            .map(|edge| {
                let endpoints_active = activation.is_node_active(&edge.source)
                    && activation.is_node_active(&edge.target);
                let hovered = hover.is_some_and(|h| h.edge_ids.contains(&edge.id));
                let state = if hide_inactive && !endpoints_active {
                    EdgeState::Hidden
                } else if hovered {
                    EdgeState::Hovered
                } else if activation.is_edge_active(&edge.id) {
                    EdgeState::Active
                } else if activated {
                    EdgeState::Dimmed
                } else {
                    EdgeState::Neutral
                };
                EdgeView {
                    id: edge.id.clone(),
                    state,
                    optional: store.node(&edge.target).is_some_and(is_optional_target),
                }
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeView> {
        self.edges.iter().find(|e| e.id == id)
    }
}

fn is_optional_target(node: &PathwayNode) -> bool {
    node.data
        .kind
        .is_some_and(|kind| kind.is_optional_credential())
}
