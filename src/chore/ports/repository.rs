//! Repository port for chore catalogue persistence.

use crate::chore::domain::{Chore, ChoreId, ChoreName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for chore repository operations.
pub type ChoreRepositoryResult<T> = Result<T, ChoreRepositoryError>;

/// Chore catalogue persistence contract.
#[async_trait]
pub trait ChoreRepository: Send + Sync {
    /// Stores a new chore.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreRepositoryError::DuplicateName`] when a chore with the
    /// same name already exists.
    async fn create(&self, chore: &Chore) -> ChoreRepositoryResult<()>;

    /// Finds a chore by identifier.
    ///
    /// Returns `None` when the chore does not exist.
    async fn find(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>>;

    /// Returns the full catalogue ordered by chore name ascending.
    ///
    /// This ordering is the stable sort order used for staggered assignment;
    /// it must not depend on insertion order.
    async fn list(&self) -> ChoreRepositoryResult<Vec<Chore>>;
}

/// Errors returned by chore repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChoreRepositoryError {
    /// A chore with the same name already exists.
    #[error("duplicate chore name: {0}")]
    DuplicateName(ChoreName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChoreRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
