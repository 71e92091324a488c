//! Participant roster management for Rota.
//!
//! The roster is the ordered set of participants eligible for chore rotation.
//! Each participant receives an explicit rotation ordinal at registration;
//! rotation order is arithmetic over these ordinals rather than over
//! iteration order of a dynamic collection, so rotation stays deterministic
//! when participants join or depart. Participants are never deleted;
//! departure is a soft-disable so that rotation can still resolve the ordinal
//! of a departed previous assignee.

pub mod adapters;
pub mod domain;
pub mod ports;
