//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are the "hard" failures: an operation that returns one of these has
/// not mutated anything. Business outcomes such as "not found" or "not enough
/// stock" are reported through return values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed its shape or range rule (e.g. negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A relation between records was violated (e.g. unknown supplier).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A record with the same identifier is already stored.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Whether this is a data-quality failure (as opposed to a misuse of ids).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
