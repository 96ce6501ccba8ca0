//! # pathways-engine
//!
//! The pathway matcher. Loads a static pathways graph into a `petgraph` store,
//! derives forward/reverse adjacency, and answers "which nodes matter for this
//! learner?" by composing breadth-first reachability with profile predicates.
//! Every query is a pure function of the graph and the profile snapshot.

pub mod engine;
pub mod graph;
pub mod matcher;
pub mod resolver;
pub mod traversal;
pub mod visibility;

pub use engine::PathwayEngine;
pub use graph::{AdjacencyIndex, GraphStore};
pub use matcher::{match_freeform, match_programs, EligibilityTable, FreeformMatch, ProfileMatcher};
pub use resolver::{ActivationResolver, ResolutionStats};
pub use traversal::{reach, reach_within, HoverIndex};
pub use visibility::{EdgeState, EdgeView, GraphView, NodeState, NodeView, ViewOptions};
