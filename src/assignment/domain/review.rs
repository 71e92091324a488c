//! Review state and reviewer decision types.

use super::ParseReviewStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review verdict recorded on an assignment.
///
/// A freshly created or redone assignment is `Pending`; `Approved` is
/// terminal; `Rejected` sends the assignment back to the same assignee for
/// redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// No verdict yet.
    Pending,
    /// Work accepted; the assignment is immutable history.
    Approved,
    /// Work sent back for redo by the same assignee.
    Rejected,
}

impl ReviewState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for ReviewState {
    type Error = ParseReviewStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseReviewStateError(value.to_owned())),
        }
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reviewer's verdict on completed work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Accept the work and rotate the chore onward.
    Approve,
    /// Send the work back to the same assignee.
    Reject,
}

impl ReviewDecision {
    /// Returns the review state this decision resolves to.
    #[must_use]
    pub const fn into_state(self) -> ReviewState {
        match self {
            Self::Approve => ReviewState::Approved,
            Self::Reject => ReviewState::Rejected,
        }
    }
}
