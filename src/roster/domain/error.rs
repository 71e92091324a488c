//! Error types for roster domain validation.

use thiserror::Error;

/// Errors returned while constructing roster domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The participant name is empty after trimming.
    #[error("participant name must not be empty")]
    EmptyParticipantName,

    /// The rotation ordinal is negative.
    #[error("invalid rotation ordinal {0}, expected a non-negative integer")]
    InvalidOrdinal(i32),
}
