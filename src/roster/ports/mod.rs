//! Port contracts for roster management.
//!
//! Ports define infrastructure-agnostic interfaces used by rotation and
//! review services.

pub mod repository;

pub use repository::{RosterRepository, RosterRepositoryError, RosterRepositoryResult};
