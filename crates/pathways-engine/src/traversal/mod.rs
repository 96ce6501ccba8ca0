//! Reachability: breadth-first traversal over one adjacency direction.

pub mod bfs;
pub mod hover;

pub use bfs::{reach, reach_within};
pub use hover::HoverIndex;
