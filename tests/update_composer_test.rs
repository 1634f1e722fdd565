//! Update composer tests: which PATCH calls a save produces for a stored case.

mod common;

use chrono::NaiveDate;
use serde_json::json;

use casedesk::models::case::{compose_updates, CaseUpdateCall, UpdateIntent};
use common::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).expect("valid date")
}

fn endpoints(calls: &[CaseUpdateCall]) -> Vec<&'static str> {
    calls.iter().map(CaseUpdateCall::endpoint).collect()
}

#[test]
fn test_unchanged_form_makes_no_calls() {
    let stored = case(1, "decision_made", json!({
        "accepted_date": "2025-03-01T00:00:00.000Z",
        "hearing_date": "2025-04-10T10:00:00.000Z"
    }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-04-10T10:00".into()),
        acceptance_date: Some("2025-03-01".into()),
        ..UpdateIntent::new("decision_made")
    };
    assert!(compose_updates(&stored, &intent, today()).is_empty());
}

#[test]
fn test_accepting_sends_one_composite_call() {
    let stored = case(2, "submitted", json!({}));
    let intent = UpdateIntent {
        hearing_date: Some("2025-06-01T11:30".into()),
        acceptance_date: Some("2025-05-20".into()),
        ..UpdateIntent::new("accepted")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(
        calls,
        vec![CaseUpdateCall::Accept {
            accepted_date: Some("2025-05-20".into()),
            hearing_date: Some("2025-06-01T11:30".into()),
        }]
    );
    assert_eq!(calls[0].path(2), "cases/2/accept");
}

#[test]
fn test_plain_status_change() {
    let stored = case(3, "submitted", json!({}));
    let calls = compose_updates(&stored, &UpdateIntent::new("pending_check"), today());
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body(), json!({ "status": "pending_check" }));
}

#[test]
fn test_returning_carries_return_date() {
    let stored = case(4, "accepted", json!({ "accepted_date": "2025-03-01" }));
    let intent = UpdateIntent {
        return_date: Some("2025-05-19".into()),
        ..UpdateIntent::new("returned")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(endpoints(&calls), vec!["status"]);
    assert_eq!(calls[0].body(), json!({ "status": "returned", "return_date": "2025-05-19" }));
}

#[test]
fn test_appeal_sends_status_and_dedicated_hearing() {
    let stored = case(5, "decision_made", json!({}));
    let intent = UpdateIntent {
        appeal_hearing_date: Some("2025-07-01T09:00".into()),
        ..UpdateIntent::new("appeal")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(endpoints(&calls), vec!["status", "appeal-hearing"]);
    assert_eq!(
        calls[0].body(),
        json!({ "status": "appeal", "appeal_hearing_date": "2025-07-01T09:00" })
    );
}

#[test]
fn test_date_edits_use_dedicated_endpoints() {
    let stored = case(6, "pending_check", json!({
        "accepted_date": "2025-03-01",
        "hearing_date": "2025-04-10T10:00:00"
    }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-04-11T10:00".into()),
        acceptance_date: Some("2025-03-02".into()),
        ..UpdateIntent::new("pending_check")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(
        calls,
        vec![
            CaseUpdateCall::Hearing { hearing_date: "2025-04-11T10:00".into() },
            CaseUpdateCall::AcceptedDate { accepted_date: "2025-03-02".into() },
        ]
    );
}

#[test]
fn test_status_change_plus_hearing_edit() {
    let stored = case(7, "accepted", json!({ "hearing_date": "2025-04-10T10:00:00" }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-04-12T15:00".into()),
        ..UpdateIntent::new("decision_made")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(endpoints(&calls), vec!["status", "hearing"]);
}

#[test]
fn test_seconds_do_not_count_as_a_change() {
    let stored = case(8, "decision_made", json!({ "hearing_date": "2025-04-10T10:00:45" }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-04-10T10:00".into()),
        ..UpdateIntent::new("decision_made")
    };
    assert!(compose_updates(&stored, &intent, today()).is_empty());
}

#[test]
fn test_returned_case_hearing_goes_through_accept() {
    let stored = case(9, "returned", json!({
        "accepted_date": "2025-03-01T00:00:00.000Z",
        "return_date": "2025-05-01"
    }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-06-01T10:00".into()),
        return_date: Some("2025-05-01".into()),
        ..UpdateIntent::new("returned")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(
        calls,
        vec![CaseUpdateCall::Accept {
            accepted_date: Some("2025-03-01".into()),
            hearing_date: Some("2025-06-01T10:00".into()),
        }]
    );
}

#[test]
fn test_returned_case_without_acceptance_uses_today() {
    let stored = case(10, "returned", json!({}));
    let intent = UpdateIntent {
        hearing_date: Some("2025-06-01T10:00".into()),
        ..UpdateIntent::new("returned")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(
        calls,
        vec![CaseUpdateCall::Accept {
            accepted_date: Some("2025-05-20".into()),
            hearing_date: Some("2025-06-01T10:00".into()),
        }]
    );
}

#[test]
fn test_returned_case_return_date_edit() {
    let stored = case(11, "returned", json!({ "return_date": "2025-05-01" }));
    let intent = UpdateIntent {
        return_date: Some("2025-05-02".into()),
        ..UpdateIntent::new("returned")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(calls, vec![CaseUpdateCall::ReturnDate { return_date: "2025-05-02".into() }]);
}

#[test]
fn test_resubmitting_returned_case() {
    let stored = case(12, "returned", json!({ "return_date": "2025-05-01" }));
    let intent = UpdateIntent {
        return_date: Some("2025-05-03".into()),
        ..UpdateIntent::new("submitted")
    };
    let calls = compose_updates(&stored, &intent, today());
    assert_eq!(endpoints(&calls), vec!["status", "return-date"]);
    assert_eq!(calls[0].body(), json!({ "status": "submitted" }));
}

#[test]
fn test_untouched_fields_make_no_calls() {
    let stored = case(13, "decision_made", json!({ "appeal_hearing_date": "2025-07-01T09:00:00" }));
    let calls = compose_updates(&stored, &UpdateIntent::new("decision_made"), today());
    assert!(calls.is_empty());
}

#[test]
fn test_staying_accepted_sends_no_date_calls() {
    // Dates for an accepted case only travel with the accept transition itself.
    let stored = case(14, "accepted", json!({ "hearing_date": "2025-04-10T10:00:00" }));
    let intent = UpdateIntent {
        hearing_date: Some("2025-04-12T15:00".into()),
        acceptance_date: Some("2025-03-02".into()),
        ..UpdateIntent::new("accepted")
    };
    assert!(compose_updates(&stored, &intent, today()).is_empty());
}
