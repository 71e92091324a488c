//! `PostgreSQL` adapters for roster persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresRosterRepository, RosterPgPool};
