//! Chore aggregate for the recurring-work catalogue.

use super::{ChoreId, ChoreName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named unit of recurring work.
///
/// Chores are immutable once created; completion and review state live on
/// assignments, never on the chore itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    id: ChoreId,
    name: ChoreName,
    description: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedChoreData {
    /// Persisted chore identifier.
    pub id: ChoreId,
    /// Persisted chore name.
    pub name: ChoreName,
    /// Persisted chore description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Chore {
    /// Creates a new chore.
    #[must_use]
    pub fn new(name: ChoreName, description: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: ChoreId::new(),
            name,
            description: description.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a chore from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedChoreData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the chore identifier.
    #[must_use]
    pub const fn id(&self) -> ChoreId {
        self.id
    }

    /// Returns the chore name.
    #[must_use]
    pub const fn name(&self) -> &ChoreName {
        &self.name
    }

    /// Returns the chore description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
