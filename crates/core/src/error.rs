//! Error types for palletpack.

use thiserror::Error;

/// Result type alias for palletpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packing.
///
/// Geometric non-fit is never an error: items that do not fit are reported
/// as unfitted. Only malformed input and broken invariants surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box specification provided.
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    /// Invalid pallet specification provided.
    #[error("Invalid pallet: {0}")]
    InvalidPallet(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A packing invariant was violated. Indicates a solver bug.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Returns true if the error was caused by malformed caller input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidBox(_) | Error::InvalidPallet(_) | Error::ConfigError(_)
        )
    }
}
