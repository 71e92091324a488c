//! Diesel row models for assignment persistence.

use super::schema::assignments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for assignment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssignmentRow {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Chore reference.
    pub chore_id: uuid::Uuid,
    /// Assignee reference.
    pub assignee_id: uuid::Uuid,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Review verdict.
    pub review_state: String,
    /// Completion notes, if any.
    pub completion_notes: Option<String>,
    /// Review timestamp, if any.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Review reason, if any.
    pub review_reason: Option<String>,
}

/// Insert model for assignment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assignments)]
pub struct NewAssignmentRow {
    /// Assignment identifier.
    pub id: uuid::Uuid,
    /// Chore reference.
    pub chore_id: uuid::Uuid,
    /// Assignee reference.
    pub assignee_id: uuid::Uuid,
    /// Assignment timestamp.
    pub assigned_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Review verdict.
    pub review_state: String,
    /// Completion notes, if any.
    pub completion_notes: Option<String>,
    /// Review timestamp, if any.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Review reason, if any.
    pub review_reason: Option<String>,
}
