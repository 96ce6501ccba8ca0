//! petgraph::StableGraph wrapper holding the immutable pathways dataset.

use std::collections::BTreeMap;

use pathways_core::config::GraphConfig;
use pathways_core::errors::GraphResult;
use pathways_core::models::{
    GradSpotlight, NodeType, PathwayDataset, PathwayEdge, PathwayNode, Stage,
};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::validation;

/// The underlying directed graph type. Edge weights carry the dataset edge.
pub type PathwayStableGraph = StableGraph<PathwayNode, PathwayEdge, Directed>;

/// Validated, immutable pathways graph with O(1) id lookup.
///
/// Nodes and edges are never removed after load, so petgraph index order is
/// dataset order.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// The petgraph stable graph.
    pub graph: PathwayStableGraph,
    /// Map from node id → NodeIndex.
    node_index: FxHashMap<String, NodeIndex>,
    /// Spotlights shipped alongside the graph.
    grads: Vec<GradSpotlight>,
}

impl GraphStore {
    /// Validate a dataset and build the store.
    pub fn load(dataset: PathwayDataset, config: &GraphConfig) -> GraphResult<Self> {
        validation::validate_dataset(&dataset)?;

        let PathwayDataset { nodes, edges, grads } = dataset;
        let mut graph = PathwayStableGraph::with_capacity(nodes.len(), edges.len());
        let mut node_index = FxHashMap::default();
        node_index.reserve(nodes.len());

        for node in nodes {
            let id = node.id.clone();
            let idx = graph.add_node(node);
            node_index.insert(id, idx);
        }
        for edge in edges {
            // Endpoints were checked by validate_dataset.
            if let (Some(&src), Some(&tgt)) =
                (node_index.get(&edge.source), node_index.get(&edge.target))
            {
                graph.add_edge(src, tgt, edge);
            }
        }

        let store = Self {
            graph,
            node_index,
            grads,
        };

        if let Some(node_id) = validation::find_cycle(&store) {
            if config.effective_reject_cycles() {
                return Err(pathways_core::GraphError::CycleDetected { node_id });
            }
            debug!(node_id = %node_id, "pathways graph contains a cycle");
        }

        info!(
            nodes = store.node_count(),
            edges = store.edge_count(),
            grads = store.grads.len(),
            "pathways graph loaded"
        );
        Ok(store)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&PathwayNode> {
        self.node_index
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Look up a node index by id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// All nodes, in dataset order.
    pub fn nodes(&self) -> impl Iterator<Item = &PathwayNode> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
    }

    /// All edges, in dataset order.
    pub fn edges(&self) -> impl Iterator<Item = &PathwayEdge> + '_ {
        self.graph
            .edge_indices()
            .filter_map(move |idx| self.graph.edge_weight(idx))
    }

    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &PathwayNode> + '_ {
        self.nodes().filter(move |n| n.node_type == node_type)
    }

    /// Nodes grouped by list-view stage, each group in dataset order.
    pub fn nodes_by_stage(&self) -> BTreeMap<Stage, Vec<&PathwayNode>> {
        let mut grouped: BTreeMap<Stage, Vec<&PathwayNode>> =
            Stage::ALL.into_iter().map(|stage| (stage, Vec::new())).collect();
        for node in self.nodes() {
            grouped.entry(node.stage()).or_default().push(node);
        }
        grouped
    }

    pub fn grads(&self) -> &[GradSpotlight] {
        &self.grads
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
