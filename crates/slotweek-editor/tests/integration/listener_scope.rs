//! Release-listener accounting across every way out of a drag.

use slotweek_core::Day;
use slotweek_editor::{PointerEvent, RecordingHost, SelectionController};

use crate::common::{down, enter, replay, set_slots, slot};

#[test]
fn test_listener_attached_for_drag_duration() {
    let mut editor = SelectionController::new(RecordingHost::new());
    assert_eq!(editor.host().live_listeners(), 0);

    editor.begin(Day::Monday, slot(0));
    assert_eq!(editor.host().live_listeners(), 1);

    editor.extend(Day::Monday, slot(3));
    assert_eq!(editor.host().live_listeners(), 1);

    editor.end();
    assert_eq!(editor.host().live_listeners(), 0);
}

#[test]
fn test_leave_outside_grid_ends_drag_without_rollback() {
    let editor = replay(&[
        down(Day::Wednesday, 6),
        enter(Day::Wednesday, 9),
        PointerEvent::Leave,
        enter(Day::Wednesday, 12),
    ]);
    assert!(!editor.is_dragging());
    assert_eq!(editor.host().live_listeners(), 0);
    assert_eq!(set_slots(editor.bitmap(), Day::Wednesday), vec![6, 7, 8, 9]);
}

#[test]
fn test_missing_release_then_new_press() {
    let editor = replay(&[
        down(Day::Monday, 0),
        enter(Day::Monday, 2),
        down(Day::Thursday, 5),
        PointerEvent::Up,
    ]);
    assert_eq!(editor.host().attached_total(), 2);
    assert_eq!(editor.host().live_listeners(), 0);
    assert_eq!(editor.host().stray_detaches(), 0);
}

#[test]
fn test_teardown_mid_drag() {
    let mut host = RecordingHost::new();
    {
        let mut editor = SelectionController::new(&mut host);
        editor.dispatch(down(Day::Sunday, 10));
        editor.dispatch(enter(Day::Sunday, 12));
    }
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.attached_total(), 1);
}

#[test]
fn test_reset_mid_drag() {
    let mut editor = SelectionController::new(RecordingHost::new());
    editor.dispatch(down(Day::Monday, 3));
    editor.reset();
    assert_eq!(editor.host().live_listeners(), 0);
    assert!(editor.bitmap().is_empty());

    // The next enter belongs to no drag.
    editor.dispatch(enter(Day::Monday, 6));
    assert!(editor.bitmap().is_empty());
}
