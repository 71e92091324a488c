//! In-memory repository for chore catalogue tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::chore::{
    domain::{Chore, ChoreId},
    ports::{ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult},
};

/// Thread-safe in-memory chore repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChoreRepository {
    state: Arc<RwLock<InMemoryChoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryChoreState {
    chores: HashMap<ChoreId, Chore>,
}

impl InMemoryChoreRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ChoreRepositoryError {
    ChoreRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChoreRepository for InMemoryChoreRepository {
    async fn create(&self, chore: &Chore) -> ChoreRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state
            .chores
            .values()
            .any(|existing| existing.name() == chore.name())
        {
            return Err(ChoreRepositoryError::DuplicateName(chore.name().clone()));
        }
        state.chores.insert(chore.id(), chore.clone());
        Ok(())
    }

    async fn find(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.chores.get(&id).cloned())
    }

    async fn list(&self) -> ChoreRepositoryResult<Vec<Chore>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut catalogue: Vec<Chore> = state.chores.values().cloned().collect();
        catalogue.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(catalogue)
    }
}
