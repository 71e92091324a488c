//! Port contracts for assignment persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the review
//! workflow and rotation services.

pub mod repository;

pub use repository::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult};
