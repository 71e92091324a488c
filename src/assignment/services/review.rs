//! Review workflow: completion, approval, and rejection of assigned work.

use crate::assignment::{
    domain::{Assignment, AssignmentDomainError, ReviewDecision},
    ports::{AssignmentRepository, AssignmentRepositoryError},
    services::rotation::{RotationError, RotationService},
};
use crate::chore::{domain::ChoreId, ports::ChoreRepository};
use crate::roster::{
    domain::ParticipantId,
    ports::{RosterRepository, RosterRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for review workflow operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The chore has no open assignment to act on.
    #[error("chore {0} has no open assignment")]
    NoOpenAssignment(ChoreId),

    /// Only the assignee may complete their own work.
    #[error("participant {participant_id} is not the assignee for chore {chore_id}")]
    NotAssignee {
        /// The chore whose assignment was targeted.
        chore_id: ChoreId,
        /// The participant who attempted the completion.
        participant_id: ParticipantId,
    },

    /// The assignee may not review their own work.
    #[error("participant {participant_id} cannot review their own work on chore {chore_id}")]
    SelfReview {
        /// The chore whose assignment was targeted.
        chore_id: ChoreId,
        /// The participant who attempted the review.
        participant_id: ParticipantId,
    },

    /// The reviewer is not a registered participant.
    #[error("reviewer not found: {0}")]
    UnknownReviewer(ParticipantId),

    /// The requested transition is not legal from the current state.
    #[error(transparent)]
    InvalidState(#[from] AssignmentDomainError),

    /// Post-approval rotation failed.
    #[error(transparent)]
    Rotation(#[from] RotationError),

    /// Assignment persistence failed.
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),

    /// Roster lookup failed.
    #[error(transparent)]
    Roster(#[from] RosterRepositoryError),
}

/// Result type for review workflow operations.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Outcome of a review verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// The assignment the verdict was recorded on.
    pub reviewed: Assignment,
    /// The next cycle's open assignment, present only on approval.
    pub next_assignment: Option<Assignment>,
}

/// Review workflow orchestration service.
///
/// Completion is gated on ownership (only the assignee may complete their
/// own work) and review on independence (the assignee may not review their
/// own work). Approval triggers rotation to the next participant; rejection
/// keeps the assignment bound to the same assignee for redo.
pub struct ReviewService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync + 'static,
{
    assignments: Arc<A>,
    roster: Arc<R>,
    rotation: RotationService<A, R, H, C>,
    clock: Arc<C>,
}

impl<A, R, H, C> Clone for ReviewService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            assignments: Arc::clone(&self.assignments),
            roster: Arc::clone(&self.roster),
            rotation: self.rotation.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<A, R, H, C> ReviewService<A, R, H, C>
where
    A: AssignmentRepository,
    R: RosterRepository,
    H: ChoreRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new review workflow service.
    #[must_use]
    pub const fn new(
        assignments: Arc<A>,
        roster: Arc<R>,
        rotation: RotationService<A, R, H, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            assignments,
            roster,
            rotation,
            clock,
        }
    }

    /// Records completion of a chore's open assignment.
    ///
    /// Completing a previously rejected assignment is a redo: the verdict
    /// resets to pending and the completion timestamp is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoOpenAssignment`] when the chore has no open
    /// assignment, [`ReviewError::NotAssignee`] when `actor` does not own the
    /// assignment, or [`ReviewError::InvalidState`] when the work already
    /// awaits review.
    pub async fn complete(
        &self,
        chore_id: ChoreId,
        actor: ParticipantId,
        notes: Option<String>,
    ) -> ReviewResult<Assignment> {
        let open = self
            .assignments
            .find_open(chore_id)
            .await?
            .ok_or(ReviewError::NoOpenAssignment(chore_id))?;
        if open.assignee_id() != actor {
            return Err(ReviewError::NotAssignee {
                chore_id,
                participant_id: actor,
            });
        }

        let clock = Arc::clone(&self.clock);
        self.assignments
            .update_open(chore_id, move |assignment| {
                assignment.mark_completed(notes, &*clock)
            })
            .await
            .map_err(|err| transition_error(chore_id, err))
    }

    /// Records a review verdict on a chore's completed assignment.
    ///
    /// Approval closes the assignment and opens the next cycle for the
    /// following participant; the outcome carries both rows. Rejection
    /// records the verdict and stops — no rotation, no new row.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoOpenAssignment`] when the chore has no open
    /// assignment, [`ReviewError::UnknownReviewer`] when the reviewer is not
    /// registered, [`ReviewError::SelfReview`] when the reviewer is the
    /// assignee, [`ReviewError::InvalidState`] when the work is uncompleted
    /// or already reviewed, or [`ReviewError::Rotation`] when opening the
    /// next cycle fails.
    pub async fn review(
        &self,
        chore_id: ChoreId,
        reviewer: ParticipantId,
        decision: ReviewDecision,
        reason: Option<String>,
    ) -> ReviewResult<ReviewOutcome> {
        let open = self
            .assignments
            .find_open(chore_id)
            .await?
            .ok_or(ReviewError::NoOpenAssignment(chore_id))?;
        self.roster
            .find(reviewer)
            .await?
            .ok_or(ReviewError::UnknownReviewer(reviewer))?;
        if open.assignee_id() == reviewer {
            return Err(ReviewError::SelfReview {
                chore_id,
                participant_id: reviewer,
            });
        }

        let clock = Arc::clone(&self.clock);
        let reviewed = self
            .assignments
            .update_open(chore_id, move |assignment| {
                assignment.review(decision, reason, &*clock)
            })
            .await
            .map_err(|err| transition_error(chore_id, err))?;

        let next_assignment = match decision {
            ReviewDecision::Approve => Some(self.rotation.advance(chore_id).await?),
            ReviewDecision::Reject => None,
        };

        Ok(ReviewOutcome {
            reviewed,
            next_assignment,
        })
    }
}

/// Folds repository transition failures into the caller-facing taxonomy.
fn transition_error(chore_id: ChoreId, err: AssignmentRepositoryError) -> ReviewError {
    match err {
        AssignmentRepositoryError::NoOpenAssignment(_) => ReviewError::NoOpenAssignment(chore_id),
        AssignmentRepositoryError::InvalidTransition(domain) => ReviewError::InvalidState(domain),
        other => ReviewError::Assignments(other),
    }
}
