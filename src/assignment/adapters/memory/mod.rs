//! In-memory adapters for assignment tests.

mod assignments;

pub use assignments::InMemoryAssignmentRepository;
