//! In-memory adapters for roster tests.

mod roster;

pub use roster::InMemoryRosterRepository;
