//! Error types for chore domain validation.

use thiserror::Error;

/// Errors returned while constructing chore domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChoreDomainError {
    /// The chore name is empty after trimming.
    #[error("chore name must not be empty")]
    EmptyChoreName,
}
