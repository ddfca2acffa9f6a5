//! Tests for split-session construction, lifecycle, and the mutation API
//!
//! CRITICAL: All money values are i64 (cents)

use split_payment_core_rs::{
    AllocationStrategy, Participant, SessionError, SessionInitError, SessionStatus, SplitSession,
};

fn roster(ids: &[&str]) -> Vec<Participant> {
    ids.iter()
        .map(|id| {
            Participant::new(
                id.to_string(),
                format!("{}_handle", id),
                format!("User {}", id),
            )
        })
        .collect()
}

#[test]
fn test_new_session_builds_one_line_per_participant() {
    let session = SplitSession::new(40_000, &roster(&["a", "b", "c", "d"]), "a").unwrap();

    let lines = session.snapshot();
    assert_eq!(lines.len(), 4);

    // Roster order preserved
    let ids: Vec<&str> = lines.iter().map(|l| l.participant_id()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);

    // Equal share pre-filled on every line, paying or not
    for line in lines {
        assert_eq!(line.amount(), 10_000);
    }
}

#[test]
fn test_new_rejects_non_positive_total() {
    let group = roster(&["a"]);

    assert_eq!(
        SplitSession::new(0, &group, "a").unwrap_err(),
        SessionInitError::NonPositiveTotal { amount: 0 }
    );
    assert_eq!(
        SplitSession::new(-5_000, &group, "a").unwrap_err(),
        SessionInitError::NonPositiveTotal { amount: -5_000 }
    );
}

#[test]
fn test_new_rejects_empty_roster() {
    assert_eq!(
        SplitSession::new(10_000, &[], "a").unwrap_err(),
        SessionInitError::EmptyRoster
    );
}

#[test]
fn test_new_rejects_payer_outside_roster() {
    assert_eq!(
        SplitSession::new(10_000, &roster(&["a", "b"]), "z").unwrap_err(),
        SessionInitError::PayerNotInRoster {
            payer_id: "z".to_string()
        }
    );
}

#[test]
fn test_new_rejects_duplicate_participants() {
    assert_eq!(
        SplitSession::new(10_000, &roster(&["a", "b", "a"]), "a").unwrap_err(),
        SessionInitError::DuplicateParticipant {
            id: "a".to_string()
        }
    );
}

#[test]
fn test_set_amount_clamps_out_of_range_input() {
    let mut session = SplitSession::new(20_000, &roster(&["a", "b"]), "a").unwrap();
    session.set_strategy(AllocationStrategy::Custom).unwrap();

    // Negative clamps to zero
    session.set_line_amount("a", -500).unwrap();
    assert_eq!(session.snapshot()[0].amount(), 0);

    // Above the total clamps to the total
    session.set_line_amount("a", 99_999).unwrap();
    assert_eq!(session.snapshot()[0].amount(), 20_000);
}

#[test]
fn test_switch_to_equal_restores_equal_shares() {
    let mut session = SplitSession::new(30_000, &roster(&["a", "b", "c"]), "a").unwrap();

    session.set_strategy(AllocationStrategy::Custom).unwrap();
    session.set_line_amount("a", 25_000).unwrap();
    session.toggle_paying("b").unwrap();
    session.set_line_amount("b", 5_000).unwrap();

    session.set_strategy(AllocationStrategy::Equal).unwrap();
    for line in session.snapshot() {
        assert_eq!(line.amount(), 10_000);
    }
    // Paying flags survive the switch
    assert!(session.snapshot()[1].is_paying());
    assert!(!session.snapshot()[2].is_paying());
}

#[test]
fn test_switch_to_custom_keeps_equal_baseline() {
    let mut session = SplitSession::new(30_000, &roster(&["a", "b", "c"]), "a").unwrap();

    session.set_strategy(AllocationStrategy::Custom).unwrap();
    for line in session.snapshot() {
        assert_eq!(line.amount(), 10_000); // untouched by the switch
    }
    assert_eq!(session.strategy(), AllocationStrategy::Custom);
}

#[test]
fn test_terminal_sessions_reject_all_mutations() {
    let mut session = SplitSession::new(10_000, &roster(&["a"]), "a").unwrap();
    session.cancel().unwrap();

    let closed = SessionError::Closed {
        status: SessionStatus::Cancelled,
    };
    assert_eq!(
        session.set_strategy(AllocationStrategy::Custom).unwrap_err(),
        closed
    );
    assert_eq!(session.toggle_paying("a").unwrap_err(), closed);
    assert_eq!(session.set_line_amount("a", 1).unwrap_err(), closed);
    assert_eq!(session.increment_line_amount("a", 1).unwrap_err(), closed);
    assert_eq!(session.confirm().unwrap_err(), closed);
    assert_eq!(session.cancel().unwrap_err(), closed);
}

#[test]
fn test_snapshot_readable_after_confirmation() {
    let mut session = SplitSession::new(10_000, &roster(&["a"]), "a").unwrap();
    let outcome = session.confirm().unwrap();

    // Reads still work on a closed session; only mutation is gated
    assert_eq!(session.snapshot().len(), 1);
    assert_eq!(session.outstanding(), 0);
    assert_eq!(outcome.lines, session.snapshot().to_vec());
}

#[test]
fn test_outcome_wire_shape() {
    let mut session = SplitSession::new(20_000, &roster(&["a", "b"]), "a").unwrap();
    session.toggle_paying("b").unwrap();

    let outcome = session.confirm().unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["session_id"], session.id());
    assert_eq!(json["total_amount"], 20_000);
    assert_eq!(json["payer_id"], "a");
    assert_eq!(json["payer_amount"], 10_000);
    assert_eq!(json["lines"][1]["participant_id"], "b");
    assert_eq!(json["lines"][1]["amount"], 10_000);
    assert_eq!(json["lines"][1]["is_paying"], true);
}
