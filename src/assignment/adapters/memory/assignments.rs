//! In-memory repository for assignment tests.
//!
//! The write lock around the whole transition mirrors the row lock the
//! `PostgreSQL` adapter takes: re-read, validate, write happen as one unit.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{Assignment, AssignmentDomainError, AssignmentId},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};
use crate::chore::domain::ChoreId;

/// Thread-safe in-memory assignment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<InMemoryAssignmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAssignmentState {
    assignments: HashMap<AssignmentId, Assignment>,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> AssignmentRepositoryError {
    AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn open_for_chore(state: &InMemoryAssignmentState, chore_id: ChoreId) -> Option<&Assignment> {
    state
        .assignments
        .values()
        .find(|assignment| assignment.chore_id() == chore_id && assignment.is_open())
}

fn latest_for_chore(state: &InMemoryAssignmentState, chore_id: ChoreId) -> Option<&Assignment> {
    state
        .assignments
        .values()
        .filter(|assignment| assignment.chore_id() == chore_id)
        .max_by_key(|assignment| (assignment.assigned_at(), assignment.id()))
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if open_for_chore(&state, assignment.chore_id()).is_some() {
            return Err(AssignmentRepositoryError::OpenAssignmentExists(
                assignment.chore_id(),
            ));
        }
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_open(
        &self,
        chore_id: ChoreId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(open_for_chore(&state, chore_id).cloned())
    }

    async fn find_latest(
        &self,
        chore_id: ChoreId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(latest_for_chore(&state, chore_id).cloned())
    }

    async fn list_open(&self) -> AssignmentRepositoryResult<Vec<Assignment>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut open: Vec<Assignment> = state
            .assignments
            .values()
            .filter(|assignment| assignment.is_open())
            .cloned()
            .collect();
        open.sort_by_key(|assignment| (assignment.assigned_at(), assignment.id()));
        Ok(open)
    }

    async fn update_open<F>(
        &self,
        chore_id: ChoreId,
        apply: F,
    ) -> AssignmentRepositoryResult<Assignment>
    where
        F: FnOnce(&mut Assignment) -> Result<(), AssignmentDomainError> + Send + 'static,
    {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let mut updated = open_for_chore(&state, chore_id)
            .cloned()
            .ok_or(AssignmentRepositoryError::NoOpenAssignment(chore_id))?;

        apply(&mut updated)?;

        state.assignments.insert(updated.id(), updated.clone());
        Ok(updated)
    }
}
