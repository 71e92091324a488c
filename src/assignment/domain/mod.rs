//! Domain model for chore assignments and their review state machine.
//!
//! The assignment aggregate carries its review state as a tagged value on the
//! single row rather than as a chain of linked rows: a rejected assignment is
//! mutated back toward an actionable state, never replaced, so the
//! one-open-assignment-per-chore invariant stays trivially checkable.

mod assignment;
mod error;
mod ids;
mod review;

pub use assignment::{Assignment, AssignmentStatus, PersistedAssignmentData};
pub use error::{AssignmentDomainError, ParseReviewStateError};
pub use ids::AssignmentId;
pub use review::{ReviewDecision, ReviewState};
