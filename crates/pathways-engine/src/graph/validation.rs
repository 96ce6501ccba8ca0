//! Load-time validation. The matcher assumes a well-formed graph, so every
//! structural problem is reported here, before any query runs.

use pathways_core::errors::{GraphError, GraphResult};
use pathways_core::models::PathwayDataset;
use petgraph::algo::toposort;
use rustc_hash::FxHashSet;

use super::store::GraphStore;

/// Check id uniqueness and edge endpoints.
pub fn validate_dataset(dataset: &PathwayDataset) -> GraphResult<()> {
    let mut node_ids = FxHashSet::default();
    for node in &dataset.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(GraphError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }

    let mut edge_ids = FxHashSet::default();
    for edge in &dataset.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(GraphError::DuplicateEdge {
                id: edge.id.clone(),
            });
        }
        for (endpoint, node_id) in [("source", &edge.source), ("target", &edge.target)] {
            if !node_ids.contains(node_id.as_str()) {
                return Err(GraphError::DanglingEdge {
                    edge_id: edge.id.clone(),
                    endpoint,
                    node_id: node_id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Returns the id of a node on some cycle, if the graph has one.
pub fn find_cycle(store: &GraphStore) -> Option<String> {
    match toposort(&store.graph, None) {
        Ok(_) => None,
        Err(cycle) => store
            .graph
            .node_weight(cycle.node_id())
            .map(|node| node.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use pathways_core::models::{NodeData, NodeType, PathwayEdge, PathwayNode};

    use super::*;

    fn node(id: &str) -> PathwayNode {
        PathwayNode::new(id, NodeType::Degree, NodeData::default())
    }

    #[test]
    fn rejects_duplicate_node_ids() {
        let dataset = PathwayDataset {
            nodes: vec![node("a"), node("a")],
            ..Default::default()
        };
        assert!(matches!(
            validate_dataset(&dataset),
            Err(GraphError::DuplicateNode { ref id }) if id == "a"
        ));
    }

    #[test]
    fn rejects_dangling_target() {
        let dataset = PathwayDataset {
            nodes: vec![node("a")],
            edges: vec![PathwayEdge::new("e1", "a", "ghost")],
            ..Default::default()
        };
        match validate_dataset(&dataset) {
            Err(GraphError::DanglingEdge {
                edge_id,
                endpoint,
                node_id,
            }) => {
                assert_eq!(edge_id, "e1");
                assert_eq!(endpoint, "target");
                assert_eq!(node_id, "ghost");
            }
            other => panic!("expected dangling edge, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_edge_ids() {
        let dataset = PathwayDataset {
            nodes: vec![node("a"), node("b")],
            edges: vec![PathwayEdge::new("e", "a", "b"), PathwayEdge::new("e", "b", "a")],
            ..Default::default()
        };
        assert!(matches!(
            validate_dataset(&dataset),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }
}
