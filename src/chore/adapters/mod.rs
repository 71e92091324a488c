//! Adapter implementations of the chore ports.

pub mod memory;
pub mod postgres;
