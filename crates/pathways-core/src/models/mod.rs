//! Data model: graph nodes and edges, the triage profile, and derived results.

pub mod activation;
pub mod dataset;
pub mod edge;
pub mod node;
pub mod profile;

pub use activation::{ActivationResult, HoverHighlight, MatchedProgram, ProgramMatch};
pub use dataset::{GradSpotlight, PathwayDataset};
pub use edge::PathwayEdge;
pub use node::{Category, DegreeLevel, Job, NodeData, NodeType, PathwayNode, ProgramKind, Stage};
pub use profile::{Preference, Profile, ProfileField, StartingPoint};
