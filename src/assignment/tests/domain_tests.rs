//! Unit tests for the assignment review state machine.

use crate::assignment::domain::{
    Assignment, AssignmentDomainError, AssignmentStatus, ParseReviewStateError, ReviewDecision,
    ReviewState,
};
use crate::chore::domain::ChoreId;
use crate::roster::domain::ParticipantId;
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn open_assignment(clock: DefaultClock) -> Assignment {
    Assignment::new(ChoreId::new(), ParticipantId::new(), &clock)
}

#[rstest]
fn new_assignment_is_open_and_uncompleted(open_assignment: Assignment) {
    assert_eq!(open_assignment.status(), AssignmentStatus::Open);
    assert_eq!(open_assignment.review_state(), ReviewState::Pending);
    assert!(open_assignment.completed_at().is_none());
    assert!(open_assignment.is_open());
}

#[rstest]
fn mark_completed_moves_to_pending_review(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(Some("scrubbed everything".to_owned()), &clock)?;

    ensure!(open_assignment.status() == AssignmentStatus::PendingReview);
    ensure!(open_assignment.completed_at().is_some());
    ensure!(open_assignment.completion_notes() == Some("scrubbed everything"));
    ensure!(open_assignment.is_open());
    Ok(())
}

#[rstest]
fn mark_completed_twice_is_rejected(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(None, &clock)?;

    let result = open_assignment.mark_completed(None, &clock);

    ensure!(
        result
            == Err(AssignmentDomainError::AlreadyPendingReview(
                open_assignment.id()
            ))
    );
    ensure!(open_assignment.status() == AssignmentStatus::PendingReview);
    Ok(())
}

#[rstest]
fn review_before_completion_is_rejected(clock: DefaultClock, mut open_assignment: Assignment) {
    let result = open_assignment.review(ReviewDecision::Approve, None, &clock);

    assert_eq!(
        result,
        Err(AssignmentDomainError::NotYetCompleted(open_assignment.id()))
    );
    assert_eq!(open_assignment.status(), AssignmentStatus::Open);
}

#[rstest]
fn approval_closes_the_assignment(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(None, &clock)?;
    open_assignment.review(ReviewDecision::Approve, None, &clock)?;

    ensure!(open_assignment.status() == AssignmentStatus::Approved);
    ensure!(open_assignment.reviewed_at().is_some());
    ensure!(!open_assignment.is_open());
    Ok(())
}

#[rstest]
fn approved_assignment_rejects_all_further_mutation(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(None, &clock)?;
    open_assignment.review(ReviewDecision::Approve, None, &clock)?;

    let complete_result = open_assignment.mark_completed(None, &clock);
    let review_result = open_assignment.review(ReviewDecision::Reject, None, &clock);

    ensure!(
        complete_result
            == Err(AssignmentDomainError::AlreadyApproved(open_assignment.id()))
    );
    ensure!(
        review_result
            == Err(AssignmentDomainError::AlreadyReviewed {
                assignment_id: open_assignment.id(),
                state: ReviewState::Approved,
            })
    );
    ensure!(open_assignment.status() == AssignmentStatus::Approved);
    Ok(())
}

#[rstest]
fn rejection_keeps_the_assignment_open_for_redo(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    let assignee = open_assignment.assignee_id();
    open_assignment.mark_completed(None, &clock)?;
    open_assignment.review(
        ReviewDecision::Reject,
        Some("missed the floor".to_owned()),
        &clock,
    )?;

    ensure!(open_assignment.status() == AssignmentStatus::Rejected);
    ensure!(open_assignment.review_reason() == Some("missed the floor"));
    ensure!(open_assignment.assignee_id() == assignee);
    ensure!(open_assignment.is_open());
    Ok(())
}

#[rstest]
fn rejected_assignment_cannot_be_reviewed_again(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(None, &clock)?;
    open_assignment.review(ReviewDecision::Reject, None, &clock)?;

    let result = open_assignment.review(ReviewDecision::Approve, None, &clock);

    ensure!(
        result
            == Err(AssignmentDomainError::AlreadyReviewed {
                assignment_id: open_assignment.id(),
                state: ReviewState::Rejected,
            })
    );
    Ok(())
}

#[rstest]
fn redo_resets_the_verdict_and_refreshes_completion(
    clock: DefaultClock,
    mut open_assignment: Assignment,
) -> eyre::Result<()> {
    open_assignment.mark_completed(Some("first pass".to_owned()), &clock)?;
    let first_completed_at = open_assignment
        .completed_at()
        .ok_or_else(|| eyre::eyre!("completion timestamp should be set"))?;
    open_assignment.review(
        ReviewDecision::Reject,
        Some("missed the floor".to_owned()),
        &clock,
    )?;

    open_assignment.mark_completed(Some("second pass".to_owned()), &clock)?;

    let second_completed_at = open_assignment
        .completed_at()
        .ok_or_else(|| eyre::eyre!("completion timestamp should be set"))?;
    ensure!(open_assignment.status() == AssignmentStatus::PendingReview);
    ensure!(open_assignment.review_state() == ReviewState::Pending);
    ensure!(open_assignment.completion_notes() == Some("second pass"));
    ensure!(open_assignment.review_reason().is_none());
    ensure!(open_assignment.reviewed_at().is_none());
    ensure!(second_completed_at >= first_completed_at);
    Ok(())
}

#[rstest]
#[case("pending", ReviewState::Pending)]
#[case("approved", ReviewState::Approved)]
#[case("rejected", ReviewState::Rejected)]
#[case(" Approved ", ReviewState::Approved)]
fn review_state_parses_canonical_values(#[case] raw: &str, #[case] expected: ReviewState) {
    assert_eq!(ReviewState::try_from(raw), Ok(expected));
}

#[rstest]
fn review_state_rejects_unknown_values() {
    let result = ReviewState::try_from("archived");
    assert_eq!(result, Err(ParseReviewStateError("archived".to_owned())));
}

#[rstest]
#[case(ReviewDecision::Approve, ReviewState::Approved)]
#[case(ReviewDecision::Reject, ReviewState::Rejected)]
fn decision_resolves_to_matching_state(
    #[case] decision: ReviewDecision,
    #[case] expected: ReviewState,
) {
    assert_eq!(decision.into_state(), expected);
}
