//! Participant aggregate for the rotation roster.

use super::{ParticipantId, ParticipantName, RosterOrdinal};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A roster participant eligible for chore rotation.
///
/// Identity, name, and ordinal are immutable after registration. Departure is
/// modelled as a soft-disable so that assignment history referencing the
/// participant stays resolvable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: ParticipantName,
    ordinal: RosterOrdinal,
    active: bool,
    registered_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedParticipantData {
    /// Persisted participant identifier.
    pub id: ParticipantId,
    /// Persisted participant name.
    pub name: ParticipantName,
    /// Persisted rotation ordinal.
    pub ordinal: RosterOrdinal,
    /// Whether the participant is still eligible for rotation.
    pub active: bool,
    /// Persisted registration timestamp.
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    /// Registers a new active participant at the given rotation ordinal.
    #[must_use]
    pub fn register(name: ParticipantName, ordinal: RosterOrdinal, clock: &impl Clock) -> Self {
        Self {
            id: ParticipantId::new(),
            name,
            ordinal,
            active: true,
            registered_at: clock.utc(),
        }
    }

    /// Reconstructs a participant from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedParticipantData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            ordinal: data.ordinal,
            active: data.active,
            registered_at: data.registered_at,
        }
    }

    /// Returns the participant identifier.
    #[must_use]
    pub const fn id(&self) -> ParticipantId {
        self.id
    }

    /// Returns the participant name.
    #[must_use]
    pub const fn name(&self) -> &ParticipantName {
        &self.name
    }

    /// Returns the stable rotation ordinal.
    #[must_use]
    pub const fn ordinal(&self) -> RosterOrdinal {
        self.ordinal
    }

    /// Returns whether the participant is eligible for rotation.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Marks the participant as departed.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
