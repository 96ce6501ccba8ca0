//! Test fixture loader for pathways datasets.
//!
//! Ships a sample graph covering every starting point, program kind and
//! free-text program id, plus helpers for loading it in tests across crates.

use std::path::PathBuf;

use pathways_core::models::PathwayDataset;
use serde::de::DeserializeOwned;

/// File name of the sample graph under `graphs/`.
pub const SAMPLE_GRAPH: &str = "graphs/sample_pathways.json";

/// Vision tags used by the sample graph.
pub const VISIONS: [&str; 6] = [
    "build-software",
    "data-patterns",
    "protect-systems",
    "computers-learn",
    "hardware-devices",
    "tech-business",
];

/// Math readiness levels used by the sample graph.
pub const MATH_LEVELS: [&str; 3] = ["Pre-Calculus / Trig", "Calculus I", "Calculus II+"];

/// Coding readiness levels used by the sample graph.
pub const CODING_LEVELS: [&str; 3] = ["New to coding", "Some coding", "Comfortable coding"];

/// Career goals used by the sample graph.
pub const CAREER_GOALS: [&str; 3] = ["industry", "research", "leadership"];

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The sample pathways graph.
pub fn sample_dataset() -> PathwayDataset {
    load_fixture(SAMPLE_GRAPH)
}

/// Raw JSON of the sample graph.
pub fn sample_json() -> String {
    let path = fixture_path(SAMPLE_GRAPH);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
