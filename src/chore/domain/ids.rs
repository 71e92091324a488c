//! Identifier and validated scalar types for the chore domain.

use super::ChoreDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoreId(Uuid);

impl ChoreId {
    /// Creates a new random chore identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a chore identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ChoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ChoreId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ChoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated chore name, unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoreName(String);

impl ChoreName {
    /// Creates a validated chore name.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreDomainError::EmptyChoreName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ChoreDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ChoreDomainError::EmptyChoreName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ChoreName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
