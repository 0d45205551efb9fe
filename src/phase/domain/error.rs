//! Error types for phase domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain phase values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhaseDomainError {
    /// The phase name is empty after trimming.
    #[error("phase name must not be empty")]
    EmptyName,

    /// The progress value exceeds 100 per cent.
    #[error("invalid progress {0}, expected 0-100")]
    InvalidProgress(u8),
}

/// Error returned while parsing phase statuses from untyped input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown phase status: {0}")]
pub struct ParsePhaseStatusError(pub String);
