//! Error types for assignment state machine validation and parsing.

use super::{AssignmentId, ReviewState};
use thiserror::Error;

/// Errors returned by assignment state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// Completion was requested while the assignment already awaits review.
    #[error("assignment {0} is already completed and awaiting review")]
    AlreadyPendingReview(AssignmentId),

    /// A mutation was requested on an approved assignment.
    #[error("assignment {0} is approved and permanently immutable")]
    AlreadyApproved(AssignmentId),

    /// A review was requested before the assignment was completed.
    #[error("assignment {0} has not been completed yet")]
    NotYetCompleted(AssignmentId),

    /// A review was requested but a verdict has already been recorded.
    #[error("assignment {assignment_id} was already reviewed as {state}")]
    AlreadyReviewed {
        /// The assignment that already carries a verdict.
        assignment_id: AssignmentId,
        /// The recorded verdict.
        state: ReviewState,
    },
}

/// Error returned while parsing review states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown review state: {0}")]
pub struct ParseReviewStateError(pub String);
