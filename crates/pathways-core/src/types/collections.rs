//! Re-exports of the collection types used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::{BTreeMap, BTreeSet};

/// Ordered id set handed to renderers. Iteration order is stable across runs.
pub type IdSet = BTreeSet<String>;
