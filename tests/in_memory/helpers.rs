//! Shared harness for in-memory service integration tests.

use chrono::Utc;
use mockable::DefaultClock;
use rota::assignment::{
    adapters::memory::InMemoryAssignmentRepository,
    services::{ReviewService, RotationService},
};
use rota::chore::{
    adapters::memory::InMemoryChoreRepository,
    domain::{Chore, ChoreName},
    ports::ChoreRepository,
};
use rota::roster::{
    adapters::memory::InMemoryRosterRepository,
    domain::{Participant, ParticipantName},
    ports::RosterRepository,
};
use rstest::fixture;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Provides a tokio runtime for async operations in tests.
#[fixture]
pub fn runtime() -> TestResult<Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime)
}

/// A test harness wiring the full service stack over in-memory adapters.
pub struct RotaTestHarness {
    pub assignments: Arc<InMemoryAssignmentRepository>,
    pub roster: Arc<InMemoryRosterRepository>,
    pub chores: Arc<InMemoryChoreRepository>,
    pub rotation: RotationService<
        InMemoryAssignmentRepository,
        InMemoryRosterRepository,
        InMemoryChoreRepository,
        DefaultClock,
    >,
    pub review: ReviewService<
        InMemoryAssignmentRepository,
        InMemoryRosterRepository,
        InMemoryChoreRepository,
        DefaultClock,
    >,
}

impl RotaTestHarness {
    pub fn new() -> Self {
        let assignments = Arc::new(InMemoryAssignmentRepository::new());
        let roster = Arc::new(InMemoryRosterRepository::new());
        let chores = Arc::new(InMemoryChoreRepository::new());
        let clock = Arc::new(DefaultClock);

        let rotation = RotationService::new(
            Arc::clone(&assignments),
            Arc::clone(&roster),
            Arc::clone(&chores),
            Arc::clone(&clock),
        );
        let review = ReviewService::new(
            Arc::clone(&assignments),
            Arc::clone(&roster),
            rotation.clone(),
            Arc::clone(&clock),
        );

        Self {
            assignments,
            roster,
            chores,
            rotation,
            review,
        }
    }
}

#[fixture]
pub fn harness() -> RotaTestHarness {
    RotaTestHarness::new()
}

/// Seeds the canonical household: three participants and six chores.
///
/// Chore names are chosen so catalogue order matches insertion order, which
/// keeps the staggered initial distribution easy to reason about in
/// assertions.
///
/// # Errors
///
/// Returns an error if any registration or catalogue insert fails.
pub async fn seed_household(
    harness: &RotaTestHarness,
) -> TestResult<(Vec<Participant>, Vec<Chore>)> {
    let mut participants = Vec::new();
    for name in ["user1", "user2", "user3"] {
        let participant = harness
            .roster
            .register(ParticipantName::new(name)?, Utc::now())
            .await?;
        participants.push(participant);
    }

    let clock = DefaultClock;
    let mut chores = Vec::new();
    for name in [
        "Bathroom Cleaning",
        "Dishes",
        "Kitchen Cleaning",
        "Laundry",
        "Trash",
        "Vacuuming",
    ] {
        let chore = Chore::new(ChoreName::new(name)?, format!("{name} duties"), &clock);
        harness.chores.create(&chore).await?;
        chores.push(chore);
    }

    Ok((participants, chores))
}
