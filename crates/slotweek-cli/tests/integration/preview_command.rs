//! `slotweek preview`.

use crate::common::{Workspace, MONDAY_EVENTS, RETREATING_EVENTS};
use slotweek_cli::commands::{preview, EMPTY_PREVIEW};
use slotweek_cli::Error;
use slotweek_editor::ExtendPolicy;

#[test]
fn test_preview_two_blocks() {
    let ws = Workspace::new();
    let events = ws.file("events.json", MONDAY_EVENTS);

    let text = preview(&events, ExtendPolicy::Sticky).unwrap();
    assert_eq!(text, "MONDAY: 09:00 – 11:00, 13:00 – 15:00");
}

#[test]
fn test_preview_respects_policy() {
    let ws = Workspace::new();
    let events = ws.file("events.json", RETREATING_EVENTS);

    assert_eq!(
        preview(&events, ExtendPolicy::Sticky).unwrap(),
        "MONDAY: 10:00 – 13:30"
    );
    assert_eq!(
        preview(&events, ExtendPolicy::Restore).unwrap(),
        "MONDAY: 10:00 – 11:30"
    );
}

#[test]
fn test_preview_empty_stream() {
    let ws = Workspace::new();
    let events = ws.file("events.json", "[]");
    assert_eq!(preview(&events, ExtendPolicy::Sticky).unwrap(), EMPTY_PREVIEW);
}

#[test]
fn test_preview_malformed_events() {
    let ws = Workspace::new();
    let events = ws.file("events.json", r#"[{ "kind": "hover" }]"#);

    let err = preview(&events, ExtendPolicy::Sticky).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("events.json"));
}
