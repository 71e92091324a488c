//! Adapter implementations of the roster ports.

pub mod memory;
pub mod postgres;
