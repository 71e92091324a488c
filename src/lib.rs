//! Rota: chore rotation tracker for a fixed group of participants.
//!
//! This crate provides the core logic for assigning recurring chores to
//! participants one at a time, recording completion, routing completed work
//! through a peer-review gate, and rotating assignment to the next
//! participant once approved.
//!
//! # Architecture
//!
//! Rota follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the relational store
//! - **Adapters**: Concrete implementations of ports (PostgreSQL, in-memory)
//!
//! # Modules
//!
//! - [`roster`]: Participants and their stable rotation ordinals
//! - [`chore`]: The catalogue of recurring chores
//! - [`assignment`]: Assignment state machine, review workflow, and rotation

pub mod assignment;
pub mod chore;
pub mod roster;
