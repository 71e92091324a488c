//! Repository port for assignment persistence and atomic state transitions.

use crate::assignment::domain::{Assignment, AssignmentDomainError};
use crate::chore::domain::ChoreId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment repository operations.
pub type AssignmentRepositoryResult<T> = Result<T, AssignmentRepositoryError>;

/// Assignment persistence contract.
///
/// Implementations must enforce the one-open-assignment-per-chore invariant
/// in the storage layer itself, so two concurrent [`create`](Self::create)
/// calls for the same chore cannot both succeed.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a new open assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::OpenAssignmentExists`] when the
    /// chore already has an open assignment.
    async fn create(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()>;

    /// Finds the chore's current open assignment.
    ///
    /// Returns `None` when every assignment for the chore is approved
    /// history, or none exists. Uniqueness is guaranteed by the invariant.
    async fn find_open(&self, chore_id: ChoreId) -> AssignmentRepositoryResult<Option<Assignment>>;

    /// Finds the most recently created assignment for the chore, approved
    /// history included.
    ///
    /// Recency is ordered by `assigned_at`, with assignment identity breaking
    /// ties. Rotation uses this to determine the previous assignee.
    async fn find_latest(
        &self,
        chore_id: ChoreId,
    ) -> AssignmentRepositoryResult<Option<Assignment>>;

    /// Returns every open assignment across all chores.
    async fn list_open(&self) -> AssignmentRepositoryResult<Vec<Assignment>>;

    /// Applies a state transition to the chore's open assignment as a single
    /// atomic unit.
    ///
    /// The implementation re-reads the open row under an exclusive lock,
    /// applies `apply` to that freshly-read state, and persists the result
    /// only when `apply` succeeds. A failed transition leaves the row in its
    /// pre-call state.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::NoOpenAssignment`] when the chore
    /// has no open assignment, or
    /// [`AssignmentRepositoryError::InvalidTransition`] when `apply` rejects
    /// the transition.
    async fn update_open<F>(
        &self,
        chore_id: ChoreId,
        apply: F,
    ) -> AssignmentRepositoryResult<Assignment>
    where
        F: FnOnce(&mut Assignment) -> Result<(), AssignmentDomainError> + Send + 'static;
}

/// Errors returned by assignment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRepositoryError {
    /// The chore already has an open assignment.
    #[error("chore {0} already has an open assignment")]
    OpenAssignmentExists(ChoreId),

    /// The chore has no open assignment to act on.
    #[error("chore {0} has no open assignment")]
    NoOpenAssignment(ChoreId),

    /// The requested transition is not legal from the current state.
    #[error(transparent)]
    InvalidTransition(#[from] AssignmentDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
