//! Service layer for chore creation and catalogue retrieval.

use crate::chore::{
    domain::{Chore, ChoreDomainError, ChoreId, ChoreName},
    ports::{ChoreRepository, ChoreRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for chore catalogue operations.
#[derive(Debug, Error)]
pub enum ChoreCatalogueError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ChoreDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChoreRepositoryError),
}

/// Result type for chore catalogue service operations.
pub type ChoreCatalogueResult<T> = Result<T, ChoreCatalogueError>;

/// Chore catalogue orchestration service.
#[derive(Clone)]
pub struct ChoreCatalogueService<R, C>
where
    R: ChoreRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ChoreCatalogueService<R, C>
where
    R: ChoreRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new chore catalogue service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new chore.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreCatalogueError::Domain`] when the name is empty or
    /// [`ChoreCatalogueError::Repository`] when the name is already taken or
    /// persistence fails.
    pub async fn create(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ChoreCatalogueResult<Chore> {
        let name = ChoreName::new(name)?;
        let chore = Chore::new(name, description, &*self.clock);
        self.repository.create(&chore).await?;
        Ok(chore)
    }

    /// Retrieves a chore by identifier.
    ///
    /// Returns `Ok(None)` when the chore does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreCatalogueError::Repository`] when persistence lookup
    /// fails.
    pub async fn find(&self, id: ChoreId) -> ChoreCatalogueResult<Option<Chore>> {
        Ok(self.repository.find(id).await?)
    }

    /// Returns the catalogue in stable name order.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreCatalogueError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> ChoreCatalogueResult<Vec<Chore>> {
        Ok(self.repository.list().await?)
    }
}
