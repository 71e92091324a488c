//! Diesel row models for roster persistence.

use super::schema::participants;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for participant records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = participants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ParticipantRow {
    /// Participant identifier.
    pub id: uuid::Uuid,
    /// Unique participant name.
    pub username: String,
    /// Stable rotation ordinal.
    pub ordinal: i32,
    /// Rotation eligibility flag.
    pub active: bool,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// Insert model for participant records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = participants)]
pub struct NewParticipantRow {
    /// Participant identifier.
    pub id: uuid::Uuid,
    /// Unique participant name.
    pub username: String,
    /// Stable rotation ordinal.
    pub ordinal: i32,
    /// Rotation eligibility flag.
    pub active: bool,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}
