//! Graph store and its derived adjacency index.

pub mod adjacency;
pub mod store;
pub mod validation;

pub use adjacency::AdjacencyIndex;
pub use store::GraphStore;
