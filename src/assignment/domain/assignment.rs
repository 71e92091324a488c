//! Assignment aggregate root and its review state machine.

use super::{AssignmentDomainError, AssignmentId, ReviewDecision, ReviewState};
use crate::chore::domain::ChoreId;
use crate::roster::domain::ParticipantId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived lifecycle position of an assignment.
///
/// The position is computed from `completed_at` and `review_state` rather
/// than stored, so the row can never disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Assigned, not yet completed.
    Open,
    /// Completed and awaiting a review verdict.
    PendingReview,
    /// Rejected and awaiting redo by the same assignee.
    Rejected,
    /// Approved; the assignment is immutable history.
    Approved,
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "open",
            Self::PendingReview => "pending_review",
            Self::Rejected => "rejected",
            Self::Approved => "approved",
        };
        f.write_str(label)
    }
}

/// Assignment aggregate root: one chore bound to one participant.
///
/// The assignee never changes for the life of the row. Rejection mutates the
/// row back toward an actionable state; only approval closes it, after which
/// rotation creates a fresh row for the next participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    chore_id: ChoreId,
    assignee_id: ParticipantId,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    review_state: ReviewState,
    completion_notes: Option<String>,
    reviewed_at: Option<DateTime<Utc>>,
    review_reason: Option<String>,
}

/// Parameter object for reconstructing a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted assignment identifier.
    pub id: AssignmentId,
    /// Persisted chore reference.
    pub chore_id: ChoreId,
    /// Persisted assignee reference.
    pub assignee_id: ParticipantId,
    /// Persisted assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted review verdict.
    pub review_state: ReviewState,
    /// Persisted completion notes, if any.
    pub completion_notes: Option<String>,
    /// Persisted review timestamp, if any.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Persisted review reason, if any.
    pub review_reason: Option<String>,
}

impl Assignment {
    /// Creates a new open, uncompleted assignment.
    #[must_use]
    pub fn new(chore_id: ChoreId, assignee_id: ParticipantId, clock: &impl Clock) -> Self {
        Self {
            id: AssignmentId::new(),
            chore_id,
            assignee_id,
            assigned_at: clock.utc(),
            completed_at: None,
            review_state: ReviewState::Pending,
            completion_notes: None,
            reviewed_at: None,
            review_reason: None,
        }
    }

    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            chore_id: data.chore_id,
            assignee_id: data.assignee_id,
            assigned_at: data.assigned_at,
            completed_at: data.completed_at,
            review_state: data.review_state,
            completion_notes: data.completion_notes,
            reviewed_at: data.reviewed_at,
            review_reason: data.review_reason,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the chore reference.
    #[must_use]
    pub const fn chore_id(&self) -> ChoreId {
        self.chore_id
    }

    /// Returns the assignee reference.
    #[must_use]
    pub const fn assignee_id(&self) -> ParticipantId {
        self.assignee_id
    }

    /// Returns the assignment timestamp.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Returns the completion timestamp, if the work was ever completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the review verdict.
    #[must_use]
    pub const fn review_state(&self) -> ReviewState {
        self.review_state
    }

    /// Returns the completion notes, if any.
    #[must_use]
    pub fn completion_notes(&self) -> Option<&str> {
        self.completion_notes.as_deref()
    }

    /// Returns the review timestamp, if a verdict was recorded.
    #[must_use]
    pub const fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }

    /// Returns the review reason, if any.
    #[must_use]
    pub fn review_reason(&self) -> Option<&str> {
        self.review_reason.as_deref()
    }

    /// Returns the derived lifecycle position.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        match (self.completed_at, self.review_state) {
            (None, _) => AssignmentStatus::Open,
            (Some(_), ReviewState::Pending) => AssignmentStatus::PendingReview,
            (Some(_), ReviewState::Rejected) => AssignmentStatus::Rejected,
            (Some(_), ReviewState::Approved) => AssignmentStatus::Approved,
        }
    }

    /// Returns whether this row is the chore's current actionable state.
    ///
    /// Open means not yet approved: uncompleted, awaiting review, and
    /// rejected-awaiting-redo all count. At most one open assignment exists
    /// per chore.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.review_state, ReviewState::Approved)
    }

    /// Records completion of the assigned work.
    ///
    /// Legal from [`AssignmentStatus::Open`] and [`AssignmentStatus::Rejected`].
    /// Completing a rejected assignment is a redo, not a new cycle: the
    /// verdict resets to [`ReviewState::Pending`], `completed_at` is
    /// refreshed, and the notes are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::AlreadyPendingReview`] when the work
    /// already awaits review, or [`AssignmentDomainError::AlreadyApproved`]
    /// when the assignment is closed.
    pub fn mark_completed(
        &mut self,
        notes: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        match self.status() {
            AssignmentStatus::Open | AssignmentStatus::Rejected => {
                self.completed_at = Some(clock.utc());
                self.review_state = ReviewState::Pending;
                self.completion_notes = notes;
                self.reviewed_at = None;
                self.review_reason = None;
                Ok(())
            }
            AssignmentStatus::PendingReview => {
                Err(AssignmentDomainError::AlreadyPendingReview(self.id))
            }
            AssignmentStatus::Approved => Err(AssignmentDomainError::AlreadyApproved(self.id)),
        }
    }

    /// Records a review verdict on completed work.
    ///
    /// Legal only from [`AssignmentStatus::PendingReview`]. Approval makes
    /// the assignment permanently immutable; rejection keeps it bound to the
    /// same assignee for redo.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::NotYetCompleted`] when the work has
    /// not been completed, or [`AssignmentDomainError::AlreadyReviewed`] when
    /// a verdict has already been recorded.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        reason: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        match self.status() {
            AssignmentStatus::PendingReview => {
                self.review_state = decision.into_state();
                self.reviewed_at = Some(clock.utc());
                self.review_reason = reason;
                Ok(())
            }
            AssignmentStatus::Open => Err(AssignmentDomainError::NotYetCompleted(self.id)),
            AssignmentStatus::Rejected | AssignmentStatus::Approved => {
                Err(AssignmentDomainError::AlreadyReviewed {
                    assignment_id: self.id,
                    state: self.review_state,
                })
            }
        }
    }
}
