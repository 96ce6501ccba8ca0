//! Forward and reverse adjacency maps derived from the edge list.

use pathways_core::models::PathwayEdge;
use petgraph::Direction;
use rustc_hash::FxHashMap;

/// Source → targets and target → sources, each list in edge order.
///
/// Built once per graph load in O(E). Ids without edges have no entry and
/// read back as an empty slice.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    forward: FxHashMap<String, Vec<String>>,
    reverse: FxHashMap<String, Vec<String>>,
}

impl AdjacencyIndex {
    pub fn build<'a>(edges: impl IntoIterator<Item = &'a PathwayEdge>) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index
                .forward
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            index
                .reverse
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
        }
        index
    }

    /// Neighbors of `id` in `direction` (`Outgoing` = successors).
    pub fn neighbors(&self, id: &str, direction: Direction) -> &[String] {
        let map = match direction {
            Direction::Outgoing => &self.forward,
            Direction::Incoming => &self.reverse,
        };
        map.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn successors(&self, id: &str) -> &[String] {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: &str) -> &[String] {
        self.neighbors(id, Direction::Incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_edge_order_both_ways() {
        let edges = vec![
            PathwayEdge::between("hs", "bs-cs"),
            PathwayEdge::between("hs", "bs-ai"),
            PathwayEdge::between("transfer", "bs-ai"),
        ];
        let index = AdjacencyIndex::build(&edges);

        assert_eq!(index.successors("hs"), ["bs-cs", "bs-ai"]);
        assert_eq!(index.predecessors("bs-ai"), ["hs", "transfer"]);
        assert!(index.successors("bs-ai").is_empty());
        assert!(index.predecessors("nowhere").is_empty());
    }
}
