//! Domain model for the chore catalogue.

mod chore;
mod error;
mod ids;

pub use chore::{Chore, PersistedChoreData};
pub use error::ChoreDomainError;
pub use ids::{ChoreId, ChoreName};
