//! Domain model for the participant roster.

mod error;
mod ids;
mod participant;

pub use error::RosterDomainError;
pub use ids::{ParticipantId, ParticipantName, RosterOrdinal};
pub use participant::{Participant, PersistedParticipantData};
