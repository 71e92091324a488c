//! Port contracts for chore catalogue management.

pub mod repository;

pub use repository::{ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult};
