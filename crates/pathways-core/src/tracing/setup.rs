//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the pathways tracing/logging system.
///
/// Reads the `PATHWAYS_LOG` environment variable for per-crate log levels.
/// Format: `PATHWAYS_LOG=pathways_engine=debug,pathways_core=warn`
///
/// Falls back to `pathways=info` if `PATHWAYS_LOG` is not set or is invalid.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // A host may already own the global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();

        ::tracing::debug!(version = VERSION, "pathways tracing initialized");
    });
}
