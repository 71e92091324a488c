//! In-memory adapters for chore catalogue tests.

mod catalogue;

pub use catalogue::InMemoryChoreRepository;
