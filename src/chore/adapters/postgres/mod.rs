//! `PostgreSQL` adapters for chore catalogue persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ChorePgPool, PostgresChoreRepository};
