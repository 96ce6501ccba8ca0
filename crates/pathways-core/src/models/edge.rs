//! Directed progression links between pathway nodes.

use serde::{Deserialize, Serialize};

/// A directed edge: "from `source` a learner can continue to `target`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathwayEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl PathwayEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Edge whose id is derived from its endpoints (`source->target`).
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}->{target}"),
            source,
            target,
        }
    }
}
