//! Application services for chore catalogue management.

mod catalogue;

pub use catalogue::{ChoreCatalogueError, ChoreCatalogueResult, ChoreCatalogueService};
