//! Graph loading and validation errors.

use super::error_code::{self, PathwaysErrorCode};

/// Errors raised while loading or validating a pathways dataset.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("duplicate edge id: {id}")]
    DuplicateEdge { id: String },

    #[error("edge {edge_id} references unknown {endpoint} node {node_id}")]
    DanglingEdge {
        edge_id: String,
        endpoint: &'static str,
        node_id: String,
    },

    #[error("cycle detected through node {node_id}")]
    CycleDetected { node_id: String },

    #[error("dataset parse error in {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("dataset read error for {path}: {message}")]
    Io { path: String, message: String },
}

impl PathwaysErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } | Self::Io { .. } => error_code::GRAPH_PARSE,
            _ => error_code::GRAPH_INVALID,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
