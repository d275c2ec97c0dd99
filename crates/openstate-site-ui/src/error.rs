//! UI error types.

use thiserror::Error;

/// Errors raised while building layout configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// A value outside an enumerated option set.
    #[error("invalid {kind} '{value}', expected one of: {expected}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
