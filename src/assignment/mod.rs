//! Assignment lifecycle, review workflow, and rotation for Rota.
//!
//! An assignment binds one chore to one participant. At most one assignment
//! per chore is open at any time; approved assignments are immutable history.
//! The review workflow moves an assignment through completion, approval, and
//! rejection, and the rotation engine opens the next cycle for the following
//! participant once work is approved. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
