//! Triage answer parsing errors.

use super::error_code::{self, PathwaysErrorCode};

/// Raised when a triage option string does not name a known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },
}

impl PathwaysErrorCode for ProfileError {
    fn error_code(&self) -> &'static str {
        error_code::PROFILE_ERROR
    }
}
