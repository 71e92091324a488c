//! Chore catalogue management for Rota.
//!
//! Chores are named units of recurring work, independent of any participant.
//! The catalogue's name ordering is the crate's stable sort order: staggered
//! initial assignment pairs the Nth chore by name with the Nth roster
//! position.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
