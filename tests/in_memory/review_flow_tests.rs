//! End-to-end review workflow tests over the full in-memory stack.

use crate::in_memory::helpers::{RotaTestHarness, TestResult, harness, runtime, seed_household};
use rota::assignment::{
    domain::{AssignmentStatus, ReviewDecision, ReviewState},
    ports::AssignmentRepository,
};
use rstest::rstest;
use tokio::runtime::Runtime;

#[rstest]
fn rejected_work_is_redone_and_approved(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (participants, chores) = seed_household(&harness).await?;
        harness.rotation.rotate_all().await?;

        // Bathroom Cleaning opens with user1; user2 acts as reviewer.
        let chore = &chores[0];
        let user1 = &participants[0];
        let user2 = &participants[1];

        let completed = harness
            .review
            .complete(chore.id(), user1.id(), Some("first pass".to_owned()))
            .await?;
        assert_eq!(completed.status(), AssignmentStatus::PendingReview);

        let rejection = harness
            .review
            .review(
                chore.id(),
                user2.id(),
                ReviewDecision::Reject,
                Some("missed the floor".to_owned()),
            )
            .await?;
        assert_eq!(rejection.reviewed.status(), AssignmentStatus::Rejected);
        assert_eq!(rejection.reviewed.review_reason(), Some("missed the floor"));
        assert!(rejection.next_assignment.is_none());

        // The chore stays with user1 for the redo.
        let open = harness
            .assignments
            .find_open(chore.id())
            .await?
            .ok_or("rejected assignment should stay open")?;
        assert_eq!(open.assignee_id(), user1.id());

        let redone = harness
            .review
            .complete(chore.id(), user1.id(), Some("second pass".to_owned()))
            .await?;
        assert_eq!(redone.id(), completed.id());
        assert_eq!(redone.status(), AssignmentStatus::PendingReview);
        assert_eq!(redone.completion_notes(), Some("second pass"));
        assert!(redone.review_reason().is_none());

        let approval = harness
            .review
            .review(chore.id(), user2.id(), ReviewDecision::Approve, None)
            .await?;
        assert_eq!(approval.reviewed.id(), completed.id());
        assert_eq!(approval.reviewed.review_state(), ReviewState::Approved);

        // Approval closes the cycle and opens the next one for user2.
        let next = approval
            .next_assignment
            .ok_or("approval should open the next cycle")?;
        assert_eq!(next.assignee_id(), user2.id());
        assert_eq!(next.status(), AssignmentStatus::Open);

        let open = harness
            .assignments
            .find_open(chore.id())
            .await?
            .ok_or("rotation should leave an open assignment")?;
        assert_eq!(open.id(), next.id());
        Ok(())
    })
}

#[rstest]
fn approval_wraps_rotation_to_the_first_participant(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (participants, chores) = seed_household(&harness).await?;
        harness.rotation.rotate_all().await?;

        // Kitchen Cleaning opens with user3, the highest ordinal.
        let chore = &chores[2];
        let user1 = &participants[0];
        let user3 = &participants[2];

        harness
            .review
            .complete(chore.id(), user3.id(), None)
            .await?;
        let outcome = harness
            .review
            .review(chore.id(), user1.id(), ReviewDecision::Approve, None)
            .await?;

        let next = outcome
            .next_assignment
            .ok_or("approval should open the next cycle")?;
        assert_eq!(next.assignee_id(), user1.id());
        Ok(())
    })
}

#[rstest]
fn approved_history_accumulates_across_cycles(
    runtime: TestResult<Runtime>,
    harness: RotaTestHarness,
) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let (participants, chores) = seed_household(&harness).await?;
        harness.rotation.rotate_all().await?;

        let chore = &chores[0];
        let mut assignee = participants[0].id();
        let reviewer_pool = [
            participants[0].id(),
            participants[1].id(),
            participants[2].id(),
        ];

        // Drive two full approval cycles and verify each leaves exactly one
        // open assignment behind.
        for _ in 0..2 {
            harness.review.complete(chore.id(), assignee, None).await?;
            let reviewer = reviewer_pool
                .iter()
                .copied()
                .find(|candidate| *candidate != assignee)
                .ok_or("a distinct reviewer should exist")?;
            let outcome = harness
                .review
                .review(chore.id(), reviewer, ReviewDecision::Approve, None)
                .await?;
            let next = outcome
                .next_assignment
                .ok_or("approval should open the next cycle")?;
            assert_ne!(next.assignee_id(), assignee);
            assignee = next.assignee_id();
        }

        let open: Vec<_> = harness
            .assignments
            .list_open()
            .await?
            .into_iter()
            .filter(|assignment| assignment.chore_id() == chore.id())
            .collect();
        assert_eq!(open.len(), 1);
        Ok(())
    })
}
