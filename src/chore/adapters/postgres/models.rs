//! Diesel row models for chore catalogue persistence.

use super::schema::chores;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for chore records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChoreRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Unique chore name.
    pub name: String,
    /// What the chore involves.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for chore records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chores)]
pub struct NewChoreRow {
    /// Chore identifier.
    pub id: uuid::Uuid,
    /// Unique chore name.
    pub name: String,
    /// What the chore involves.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
