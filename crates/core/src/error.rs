//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it to the user and keep the
/// session running. The store is never left partially mutated when one of
/// these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, malformed number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A position did not address a row of the current sequence.
    #[error("position {position} is out of range (valid: 0..{len})")]
    OutOfRange { position: i64, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(position: i64, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    /// `true` for input that was rejected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
