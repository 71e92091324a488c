//! Repository port for roster persistence and ordinal allocation.

use crate::roster::domain::{Participant, ParticipantId, ParticipantName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for roster repository operations.
pub type RosterRepositoryResult<T> = Result<T, RosterRepositoryError>;

/// Roster persistence contract.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Registers a new participant, allocating the next unused rotation
    /// ordinal atomically.
    ///
    /// # Errors
    ///
    /// Returns [`RosterRepositoryError::DuplicateName`] when the name is
    /// already taken.
    async fn register(
        &self,
        name: ParticipantName,
        registered_at: DateTime<Utc>,
    ) -> RosterRepositoryResult<Participant>;

    /// Finds a participant by identifier, including departed participants.
    ///
    /// Returns `None` when no participant with the identifier was ever
    /// registered.
    async fn find(&self, id: ParticipantId) -> RosterRepositoryResult<Option<Participant>>;

    /// Returns all active participants ordered by rotation ordinal ascending.
    async fn list_active(&self) -> RosterRepositoryResult<Vec<Participant>>;

    /// Soft-disables a participant, removing them from rotation eligibility.
    ///
    /// The participant row is retained: assignment history referencing a
    /// departed participant must still resolve their ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`RosterRepositoryError::NotFound`] when the participant does
    /// not exist.
    async fn deactivate(&self, id: ParticipantId) -> RosterRepositoryResult<()>;
}

/// Errors returned by roster repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RosterRepositoryError {
    /// A participant with the same name already exists.
    #[error("duplicate participant name: {0}")]
    DuplicateName(ParticipantName),

    /// The participant was not found.
    #[error("participant not found: {0}")]
    NotFound(ParticipantId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RosterRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
