//! Hover highlighting: the part of a node's ancestor/descendant chain that lies
//! on a complete entry-to-outcome path.

use pathways_core::models::{HoverHighlight, NodeType};
use petgraph::Direction;
use rustc_hash::FxHashSet;

use super::bfs::reach;
use crate::graph::{AdjacencyIndex, GraphStore};

/// Per-graph reachability from all entry points and to all outcomes.
/// Computed once per graph load; each hover is then two traversals.
#[derive(Debug, Clone, Default)]
pub struct HoverIndex {
    from_entries: FxHashSet<String>,
    to_outcomes: FxHashSet<String>,
}

impl HoverIndex {
    pub fn build(store: &GraphStore, adjacency: &AdjacencyIndex) -> Self {
        let entries = store.nodes_of_type(NodeType::Entry).map(|n| n.id.as_str());
        let outcomes = store.nodes_of_type(NodeType::Career).map(|n| n.id.as_str());
        Self {
            from_entries: reach(entries, adjacency, Direction::Outgoing),
            to_outcomes: reach(outcomes, adjacency, Direction::Incoming),
        }
    }

    /// Highlight for `hovered`: its ancestors that some entry point reaches,
    /// its descendants that reach some outcome, and itself. Unknown ids
    /// highlight nothing.
    pub fn highlight(
        &self,
        store: &GraphStore,
        adjacency: &AdjacencyIndex,
        hovered: &str,
    ) -> HoverHighlight {
        if !store.contains(hovered) {
            return HoverHighlight::default();
        }

        let ancestors = reach([hovered], adjacency, Direction::Incoming);
        let descendants = reach([hovered], adjacency, Direction::Outgoing);

        let mut highlight = HoverHighlight::default();
        highlight.node_ids.extend(
            ancestors
                .into_iter()
                .filter(|id| self.from_entries.contains(id)),
        );
        highlight.node_ids.extend(
            descendants
                .into_iter()
                .filter(|id| self.to_outcomes.contains(id)),
        );
        highlight.node_ids.insert(hovered.to_string());

        highlight.edge_ids = store
            .edges()
            .filter(|e| {
                highlight.node_ids.contains(&e.source) && highlight.node_ids.contains(&e.target)
            })
            .map(|e| e.id.clone())
            .collect();
        highlight
    }
}
