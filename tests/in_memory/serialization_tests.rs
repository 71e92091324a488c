//! Wire-shape tests for the serialized domain aggregates.

use crate::in_memory::helpers::TestResult;
use mockable::DefaultClock;
use rota::assignment::domain::{Assignment, ReviewDecision, ReviewState};
use rota::chore::domain::ChoreId;
use rota::roster::domain::{Participant, ParticipantId, ParticipantName, RosterOrdinal};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn review_state_serializes_as_lowercase_tags() -> TestResult {
    assert_eq!(serde_json::to_value(ReviewState::Pending)?, json!("pending"));
    assert_eq!(
        serde_json::to_value(ReviewState::Approved)?,
        json!("approved")
    );
    assert_eq!(
        serde_json::to_value(ReviewState::Rejected)?,
        json!("rejected")
    );
    Ok(())
}

#[rstest]
fn open_assignment_serializes_with_null_review_fields() -> TestResult {
    let clock = DefaultClock;
    let assignment = Assignment::new(ChoreId::new(), ParticipantId::new(), &clock);

    let value = serde_json::to_value(&assignment)?;

    assert_eq!(value["review_state"], json!("pending"));
    assert_eq!(value["completed_at"], json!(null));
    assert_eq!(value["completion_notes"], json!(null));
    assert_eq!(value["reviewed_at"], json!(null));
    assert_eq!(value["review_reason"], json!(null));
    assert!(value["id"].is_string());
    assert!(value["chore_id"].is_string());
    assert!(value["assignee_id"].is_string());
    assert!(value["assigned_at"].is_string());
    Ok(())
}

#[rstest]
fn reviewed_assignment_round_trips() -> TestResult {
    let clock = DefaultClock;
    let mut assignment = Assignment::new(ChoreId::new(), ParticipantId::new(), &clock);
    assignment.mark_completed(Some("scrubbed".to_owned()), &clock)?;
    assignment.review(
        ReviewDecision::Reject,
        Some("missed the floor".to_owned()),
        &clock,
    )?;

    let value = serde_json::to_value(&assignment)?;
    assert_eq!(value["review_state"], json!("rejected"));
    assert_eq!(value["completion_notes"], json!("scrubbed"));
    assert_eq!(value["review_reason"], json!("missed the floor"));

    let restored: Assignment = serde_json::from_value(value)?;
    assert_eq!(restored, assignment);
    Ok(())
}

#[rstest]
fn participant_name_serializes_transparently() -> TestResult {
    let name = ParticipantName::new("user1")?;
    assert_eq!(serde_json::to_value(&name)?, json!("user1"));

    let restored: ParticipantName = serde_json::from_value(json!("user1"))?;
    assert_eq!(restored, name);
    Ok(())
}

#[rstest]
fn participant_serializes_with_flat_scalar_fields() -> TestResult {
    let clock = DefaultClock;
    let participant = Participant::register(
        ParticipantName::new("user1")?,
        RosterOrdinal::new(0)?,
        &clock,
    );

    let value = serde_json::to_value(&participant)?;

    assert_eq!(value["name"], json!("user1"));
    assert_eq!(value["ordinal"], json!(0));
    assert_eq!(value["active"], json!(true));
    assert!(value["id"].is_string());
    let raw = value["registered_at"]
        .as_str()
        .ok_or("timestamp should serialize as text")?;
    assert!(raw.ends_with('Z') || raw.contains('+'));
    Ok(())
}
