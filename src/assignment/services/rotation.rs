//! Rotation engine: next-assignee selection and administrative sweeps.

use crate::assignment::{
    domain::Assignment,
    ports::{AssignmentRepository, AssignmentRepositoryError},
};
use crate::chore::{
    domain::{Chore, ChoreId},
    ports::{ChoreRepository, ChoreRepositoryError},
};
use crate::roster::{
    domain::Participant,
    ports::{RosterRepository, RosterRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for rotation operations.
#[derive(Debug, Error)]
pub enum RotationError {
    /// No active participants are available for rotation.
    #[error("cannot rotate: the roster has no active participants")]
    EmptyRoster,

    /// The chore does not exist.
    #[error("chore not found: {0}")]
    UnknownChore(ChoreId),

    /// Assignment persistence failed; includes losing a concurrent rotation
    /// race ([`AssignmentRepositoryError::OpenAssignmentExists`]).
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),

    /// Roster lookup failed.
    #[error(transparent)]
    Roster(#[from] RosterRepositoryError),

    /// Chore catalogue lookup failed.
    #[error(transparent)]
    Chores(#[from] ChoreRepositoryError),
}

/// Result type for rotation service operations.
pub type RotationResult<T> = Result<T, RotationError>;

/// Rotation orchestration service.
///
/// The engine only reads roster and assignment history and creates new open
/// assignments; it never mutates existing rows. Next-assignee selection is
/// arithmetic over stable roster ordinals, so it stays deterministic when
/// participants join or depart.
pub struct RotationService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync,
{
    assignments: Arc<A>,
    roster: Arc<R>,
    chores: Arc<H>,
    clock: Arc<C>,
}

impl<A, R, H, C> Clone for RotationService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            assignments: Arc::clone(&self.assignments),
            roster: Arc::clone(&self.roster),
            chores: Arc::clone(&self.chores),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<A, R, H, C> RotationService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new rotation service.
    #[must_use]
    pub const fn new(assignments: Arc<A>, roster: Arc<R>, chores: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            assignments,
            roster,
            chores,
            clock,
        }
    }

    /// Plans the staggered initial distribution of chores across the roster.
    ///
    /// Pairs the Nth chore in catalogue order with the participant at active
    /// roster index `N mod |roster|`. The plan is deterministic for a given
    /// catalogue and roster and performs no writes.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyRoster`] when no participants are
    /// active, or a repository error when lookup fails.
    pub async fn initial_assignments(&self) -> RotationResult<Vec<(Chore, Participant)>> {
        let catalogue = self.chores.list().await?;
        let active = self.roster.list_active().await?;
        if active.is_empty() {
            return Err(RotationError::EmptyRoster);
        }

        Ok(catalogue
            .into_iter()
            .zip(active.iter().cloned().cycle())
            .collect())
    }

    /// Opens the next assignment cycle for a chore.
    ///
    /// Selects the active participant with the smallest ordinal strictly
    /// greater than the previous assignee's, wrapping to the lowest active
    /// ordinal. Departed participants are skipped because only active
    /// ordinals are candidates; history referencing a participant that was
    /// purged from the roster entirely falls back to the lowest active
    /// ordinal. A chore with no history at all receives its staggered
    /// initial-distribution choice.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::UnknownChore`] when the chore does not exist,
    /// [`RotationError::EmptyRoster`] when no participants are active, or
    /// [`RotationError::Assignments`] when the chore already has an open
    /// assignment (a concurrent rotation won the race).
    pub async fn advance(&self, chore_id: ChoreId) -> RotationResult<Assignment> {
        let chore = self
            .chores
            .find(chore_id)
            .await?
            .ok_or(RotationError::UnknownChore(chore_id))?;
        let active = self.roster.list_active().await?;
        let next = self.next_assignee(&chore, &active).await?;

        let assignment = Assignment::new(chore.id(), next.id(), &*self.clock);
        self.assignments.create(&assignment).await?;
        Ok(assignment)
    }

    /// Administrative sweep: opens a cycle for every chore without one.
    ///
    /// Idempotent — chores that already have an open assignment are left
    /// untouched, so a second immediate invocation rotates nothing.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; chores already swept stay
    /// assigned.
    pub async fn rotate_all(&self) -> RotationResult<Vec<Assignment>> {
        let catalogue = self.chores.list().await?;
        let mut opened = Vec::new();
        for chore in catalogue {
            if self.assignments.find_open(chore.id()).await?.is_some() {
                continue;
            }
            opened.push(self.advance(chore.id()).await?);
        }
        Ok(opened)
    }

    async fn next_assignee(
        &self,
        chore: &Chore,
        active: &[Participant],
    ) -> RotationResult<Participant> {
        let Some(first) = active.first() else {
            return Err(RotationError::EmptyRoster);
        };

        match self.assignments.find_latest(chore.id()).await? {
            Some(latest) => match self.roster.find(latest.assignee_id()).await? {
                Some(previous) => Ok(active
                    .iter()
                    .find(|candidate| candidate.ordinal() > previous.ordinal())
                    .unwrap_or(first)
                    .clone()),
                // Stale history: the previous assignee no longer exists in
                // the roster table, so restart from the lowest ordinal.
                None => Ok(first.clone()),
            },
            None => {
                let catalogue = self.chores.list().await?;
                let position = catalogue
                    .iter()
                    .position(|candidate| candidate.id() == chore.id())
                    .unwrap_or(0);
                Ok(active
                    .iter()
                    .cycle()
                    .nth(position)
                    .unwrap_or(first)
                    .clone())
            }
        }
    }
}
