//! PathwaysErrorCode trait for host-boundary conversion.

/// Stable error codes for hosts that embed the matcher (renderers, bindings).
/// Every error enum implements this so callers can branch on a code string
/// instead of parsing messages.
pub trait PathwaysErrorCode {
    /// Returns the error code string (e.g., "GRAPH_INVALID").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_INVALID: &str = "GRAPH_INVALID";
pub const GRAPH_PARSE: &str = "GRAPH_PARSE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROFILE_ERROR: &str = "PROFILE_ERROR";
