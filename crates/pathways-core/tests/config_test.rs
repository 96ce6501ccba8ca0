//! Tests for the pathways configuration system.

use std::sync::Mutex;

use pathways_core::config::PathwaysConfig;
use pathways_core::errors::{ConfigError, PathwaysErrorCode};
use pathways_core::models::ProfileField;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_pathways_env_vars() {
    for key in [
        "PATHWAYS_GRAPH_REJECT_CYCLES",
        "PATHWAYS_MATCHER_FALLBACK_NODE_ID",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pathways_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = PathwaysConfig::load(dir.path()).unwrap();

    assert!(!config.graph.effective_reject_cycles());
    assert_eq!(config.matcher.effective_fallback_node_id(), "general-overview");
    assert_eq!(
        config.matcher.effective_transfer_bridge_ids(),
        vec!["transfer-bridge".to_string()]
    );
    assert_eq!(
        config.matcher.effective_required_fields(),
        ProfileField::DEFAULT_REQUIRED.to_vec()
    );
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pathways_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("pathways.toml"),
        r#"
[graph]
reject_cycles = true

[matcher]
fallback_node_id = "advising-overview"
transfer_bridge_ids = ["transfer-bridge", "fcs-bridge"]
required_fields = ["starting_point", "preference"]
"#,
    )
    .unwrap();

    std::env::set_var("PATHWAYS_MATCHER_FALLBACK_NODE_ID", "from-env");
    let config = PathwaysConfig::load(dir.path()).unwrap();
    clear_pathways_env_vars();

    assert!(config.graph.effective_reject_cycles());
    assert_eq!(config.matcher.effective_fallback_node_id(), "from-env");
    assert_eq!(config.matcher.effective_transfer_bridge_ids().len(), 2);
    assert_eq!(
        config.matcher.effective_required_fields(),
        vec![ProfileField::StartingPoint, ProfileField::Preference]
    );
}

#[test]
fn invalid_toml_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_pathways_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("pathways.toml"), "[graph\nreject_cycles = ").unwrap();

    let err = PathwaysConfig::load(dir.path()).unwrap_err();
    match &err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("pathways.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.boundary_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn empty_fallback_id_fails_validation() {
    let err = PathwaysConfig::from_toml("[matcher]\nfallback_node_id = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "matcher.fallback_node_id"));
}

#[test]
fn toml_round_trip_keeps_overrides() {
    let config = PathwaysConfig::from_toml(
        "[matcher]\nfallback_node_id = \"advising-overview\"\nrequired_fields = [\"career_goal\"]\n",
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = PathwaysConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.matcher.effective_fallback_node_id(), "advising-overview");
    assert_eq!(
        reparsed.matcher.effective_required_fields(),
        vec![ProfileField::CareerGoal]
    );
}
