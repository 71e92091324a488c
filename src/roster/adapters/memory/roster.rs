//! In-memory repository for roster tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::roster::{
    domain::{Participant, ParticipantId, ParticipantName, PersistedParticipantData, RosterOrdinal},
    ports::{RosterRepository, RosterRepositoryError, RosterRepositoryResult},
};

/// Thread-safe in-memory roster repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepository {
    state: Arc<RwLock<InMemoryRosterState>>,
}

#[derive(Debug, Default)]
struct InMemoryRosterState {
    participants: HashMap<ParticipantId, Participant>,
}

impl InMemoryRosterRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> RosterRepositoryError {
    RosterRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn next_ordinal(state: &InMemoryRosterState) -> RosterRepositoryResult<RosterOrdinal> {
    let next = state
        .participants
        .values()
        .map(|participant| participant.ordinal().value())
        .max()
        .map_or(0, |highest| highest + 1);
    RosterOrdinal::new(next).map_err(RosterRepositoryError::persistence)
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn register(
        &self,
        name: ParticipantName,
        registered_at: DateTime<Utc>,
    ) -> RosterRepositoryResult<Participant> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state
            .participants
            .values()
            .any(|participant| participant.name() == &name)
        {
            return Err(RosterRepositoryError::DuplicateName(name));
        }

        let ordinal = next_ordinal(&state)?;
        let participant = Participant::from_persisted(PersistedParticipantData {
            id: ParticipantId::new(),
            name,
            ordinal,
            active: true,
            registered_at,
        });
        state.participants.insert(participant.id(), participant.clone());
        Ok(participant)
    }

    async fn find(&self, id: ParticipantId) -> RosterRepositoryResult<Option<Participant>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.participants.get(&id).cloned())
    }

    async fn list_active(&self) -> RosterRepositoryResult<Vec<Participant>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut active: Vec<Participant> = state
            .participants
            .values()
            .filter(|participant| participant.is_active())
            .cloned()
            .collect();
        active.sort_by_key(Participant::ordinal);
        Ok(active)
    }

    async fn deactivate(&self, id: ParticipantId) -> RosterRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let participant = state
            .participants
            .get_mut(&id)
            .ok_or(RosterRepositoryError::NotFound(id))?;
        participant.deactivate();
        Ok(())
    }
}
