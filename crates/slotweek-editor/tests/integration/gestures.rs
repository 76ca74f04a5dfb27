//! Whole-gesture scenarios.

use slotweek_core::{compress_day, preview_lines, Day, TOTAL_SLOTS};
use slotweek_editor::{DragMode, ExtendPolicy, PointerEvent, RecordingHost, SelectionController};

use crate::common::{down, drag, enter, replay, set_slots, slot};

#[test]
fn test_two_drags_compress_to_two_ranges() {
    let mut events = drag(Day::Monday, 2, 5);
    events.extend(drag(Day::Monday, 10, 13));
    let editor = replay(&events);

    let ranges = compress_day(editor.bitmap(), Day::Monday);
    let rendered: Vec<(String, String)> = ranges
        .iter()
        .map(|r| (r.start_time(), r.end_time()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("09:00".to_string(), "11:00".to_string()),
            ("13:00".to_string(), "15:00".to_string()),
        ]
    );
}

#[test]
fn test_drag_across_whole_day_is_one_range() {
    let editor = replay(&drag(Day::Saturday, 0, TOTAL_SLOTS - 1));
    let ranges = compress_day(editor.bitmap(), Day::Saturday);
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start_time(), "08:00");
    assert_eq!(ranges[0].end_time(), "22:00");
}

#[test]
fn test_reverse_drag_from_last_slot() {
    let editor = replay(&drag(Day::Sunday, TOTAL_SLOTS - 1, 24));
    assert_eq!(set_slots(editor.bitmap(), Day::Sunday), vec![24, 25, 26, 27]);
    assert_eq!(
        preview_lines(editor.bitmap()),
        vec!["SUNDAY: 20:00 – 22:00".to_string()]
    );
}

#[test]
fn test_mode_follows_anchor_cell() {
    let mut editor = SelectionController::new(RecordingHost::new());
    assert_eq!(editor.begin(Day::Monday, slot(4)), DragMode::Select);
    editor.end();
    assert_eq!(editor.begin(Day::Monday, slot(4)), DragMode::Deselect);
    editor.end();
    assert!(editor.bitmap().is_empty());
}

#[test]
fn test_deselect_drag_splits_a_range() {
    let mut events = drag(Day::Tuesday, 0, 11);
    events.extend(drag(Day::Tuesday, 4, 7));
    let editor = replay(&events);

    let rendered: Vec<String> = compress_day(editor.bitmap(), Day::Tuesday)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, vec!["08:00 – 10:00", "12:00 – 14:00"]);
}

#[test]
fn test_sticky_retreat_scenario() {
    let editor = replay(&[
        down(Day::Monday, 4),
        enter(Day::Monday, 10),
        enter(Day::Monday, 6),
        PointerEvent::Up,
    ]);
    assert_eq!(
        set_slots(editor.bitmap(), Day::Monday),
        (4..=10).collect::<Vec<_>>()
    );
}

#[test]
fn test_restore_retreat_scenario() {
    let mut editor =
        SelectionController::new(RecordingHost::new()).with_policy(ExtendPolicy::Restore);
    for event in [
        down(Day::Monday, 4),
        enter(Day::Monday, 10),
        enter(Day::Monday, 6),
        PointerEvent::Up,
    ] {
        editor.dispatch(event);
    }
    assert_eq!(set_slots(editor.bitmap(), Day::Monday), vec![4, 5, 6]);
}

#[test]
fn test_pointer_wandering_into_other_row_is_ignored() {
    let editor = replay(&[
        down(Day::Monday, 4),
        enter(Day::Monday, 5),
        enter(Day::Tuesday, 6),
        enter(Day::Tuesday, 9),
        enter(Day::Monday, 7),
        PointerEvent::Up,
    ]);
    assert!(editor.bitmap().is_day_empty(Day::Tuesday));
    assert_eq!(set_slots(editor.bitmap(), Day::Monday), vec![4, 5, 6, 7]);
}

#[test]
fn test_enter_after_release_does_nothing() {
    let editor = replay(&[
        down(Day::Friday, 1),
        PointerEvent::Up,
        enter(Day::Friday, 8),
    ]);
    assert_eq!(set_slots(editor.bitmap(), Day::Friday), vec![1]);
}
