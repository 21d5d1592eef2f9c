#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{get, relational_app, session_app, signed_in};
use todos_core::logging_facility::init_test_capture;
use todos_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use todos_engine::Session;

#[test]
fn test_request_lifecycle_is_logged_once() {
    let capture = init_test_capture();
    let mut app = relational_app();
    let mut session = Session::new();

    get(&mut app, &mut session, "/users/signin");

    let events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some("sign_in_form"))
        .filter(|e| e.field("backend") == Some("relational"))
        .collect();
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_START)));
    assert!(events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.field("status") == Some("200")));
}

#[test]
fn test_not_found_is_logged_as_error() {
    let capture = init_test_capture();
    let mut app = session_app();
    let mut session = signed_in(&mut app);

    let response = get(&mut app, &mut session, "/lists/424242");
    assert_eq!(response.status(), 404);

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("show_list")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err_code") == Some("ERR_NOT_FOUND")
            && e.field("status") == Some("404")
    });
    assert!(errors >= 1);
}

#[test]
fn test_password_never_reaches_logs() {
    let capture = init_test_capture();
    let mut app = session_app();
    signed_in(&mut app);

    assert!(capture
        .events()
        .iter()
        .all(|e| e.fields.values().all(|v| !v.contains(common::PASSWORD))));
}

#[test]
fn test_lifecycle_events_share_correlation_fields() {
    let capture = init_test_capture();
    let mut app = session_app();
    let mut session = signed_in(&mut app);

    assert_eq!(get(&mut app, &mut session, "/lists/777777/edit").status(), 404);

    let start = capture
        .events()
        .into_iter()
        .find(|e| e.op.as_deref() == Some("edit_list_form") && e.event.as_deref() == Some(EVENT_START))
        .expect("start event should be captured");
    let request_id = start.field("request_id").unwrap().to_string();

    let events = capture.events_with("request_id", &request_id);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END_ERROR));
    for event in &events {
        assert_eq!(event.field("backend"), Some("session"));
        assert_eq!(event.field("owner"), Some(common::USERNAME));
    }
}
