//! The static dataset a renderer ships: nodes, edges, and graduate spotlights.

use serde::{Deserialize, Serialize};

use super::edge::PathwayEdge;
use super::node::PathwayNode;
use crate::errors::{GraphError, GraphResult};

/// A recent-graduate spotlight shown next to matched programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradSpotlight {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub date: Option<String>,
    pub url: Option<String>,
    /// Topic tags ("Artificial Intelligence", "Cybersecurity", "Computing").
    pub tags: Vec<String>,
}

/// Raw, unvalidated dataset as deserialized from JSON.
///
/// Validation happens when the engine builds its graph store; this type only
/// describes the wire shape. Unknown keys (node positions, styling) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathwayDataset {
    pub nodes: Vec<PathwayNode>,
    pub edges: Vec<PathwayEdge>,
    pub grads: Vec<GradSpotlight>,
}

impl PathwayDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::Parse {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: &std::path::Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| GraphError::Parse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
