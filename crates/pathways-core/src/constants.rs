/// Pathways matcher version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Node presented alone when nothing else matches a profile.
pub const DEFAULT_FALLBACK_NODE_ID: &str = "general-overview";

/// Bridge node that transfer students may reach regardless of its kind.
pub const DEFAULT_TRANSFER_BRIDGE_ID: &str = "transfer-bridge";

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "pathways.toml";

/// Environment variable holding per-crate log directives.
pub const LOG_ENV_VAR: &str = "PATHWAYS_LOG";

/// Filter used when `PATHWAYS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "pathways=info";
