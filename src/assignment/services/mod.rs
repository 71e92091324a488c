//! Application services for assignment orchestration.

mod review;
mod rotation;

pub use review::{ReviewError, ReviewOutcome, ReviewResult, ReviewService};
pub use rotation::{RotationError, RotationResult, RotationService};
