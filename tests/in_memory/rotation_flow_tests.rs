//! Rotation sweep tests over the full in-memory stack.

use crate::in_memory::helpers::{RotaTestHarness, TestResult, harness, runtime, seed_household};
use rota::assignment::ports::AssignmentRepository;
use rota::roster::ports::RosterRepository;
use rstest::rstest;
use tokio::runtime::Runtime;

#[rstest]
fn rotate_all_staggers_chores_across_the_roster(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (participants, chores) = seed_household(&harness).await?;

        let opened = harness.rotation.rotate_all().await?;

        assert_eq!(opened.len(), chores.len());
        for (chore, expected) in chores.iter().zip(participants.iter().cycle()) {
            let open = harness
                .assignments
                .find_open(chore.id())
                .await?
                .ok_or("every chore should receive an open assignment")?;
            assert_eq!(open.assignee_id(), expected.id());
        }
        Ok(())
    })
}

#[rstest]
fn rotate_all_is_idempotent(runtime: TestResult<Runtime>, harness: RotaTestHarness) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (_, chores) = seed_household(&harness).await?;

        let first = harness.rotation.rotate_all().await?;
        let second = harness.rotation.rotate_all().await?;

        assert_eq!(first.len(), chores.len());
        assert!(second.is_empty());
        assert_eq!(harness.assignments.list_open().await?.len(), chores.len());
        Ok(())
    })
}

#[rstest]
fn initial_assignments_plan_matches_the_sweep(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (_, chores) = seed_household(&harness).await?;

        let plan = harness.rotation.initial_assignments().await?;
        let opened = harness.rotation.rotate_all().await?;

        assert_eq!(plan.len(), chores.len());
        for (chore, participant) in plan {
            let open = opened
                .iter()
                .find(|assignment| assignment.chore_id() == chore.id())
                .ok_or("the sweep should cover every planned chore")?;
            assert_eq!(open.assignee_id(), participant.id());
        }
        Ok(())
    })
}

#[rstest]
fn sweep_skips_departed_participants(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (participants, chores) = seed_household(&harness).await?;
        harness.roster.deactivate(participants[1].id()).await?;

        harness.rotation.rotate_all().await?;

        for chore in &chores {
            let open = harness
                .assignments
                .find_open(chore.id())
                .await?
                .ok_or("every chore should receive an open assignment")?;
            assert_ne!(open.assignee_id(), participants[1].id());
        }
        Ok(())
    })
}
