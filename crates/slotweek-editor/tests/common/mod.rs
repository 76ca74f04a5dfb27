//! Common helpers for slotweek-editor integration tests.

use slotweek_core::{Day, SlotBitmap, SlotIndex};
use slotweek_editor::{PointerEvent, RecordingHost, SelectionController};

/// Shorthand for a checked slot index.
pub fn slot(i: usize) -> SlotIndex {
    SlotIndex::new(i).expect("slot in range")
}

/// A pointer-down event.
pub fn down(day: Day, i: usize) -> PointerEvent {
    PointerEvent::Down { day, slot: slot(i) }
}

/// A pointer-enter event.
pub fn enter(day: Day, i: usize) -> PointerEvent {
    PointerEvent::Enter { day, slot: slot(i) }
}

/// A full press-drag-release gesture over `from..=to`.
pub fn drag(day: Day, from: usize, to: usize) -> Vec<PointerEvent> {
    let mut events = vec![down(day, from)];
    if from <= to {
        events.extend((from + 1..=to).map(|i| enter(day, i)));
    } else {
        events.extend((to..from).rev().map(|i| enter(day, i)));
    }
    events.push(PointerEvent::Up);
    events
}

/// Replays `events` on a fresh controller.
pub fn replay(events: &[PointerEvent]) -> SelectionController<RecordingHost> {
    let mut editor = SelectionController::new(RecordingHost::new());
    for event in events {
        editor.dispatch(*event);
    }
    editor
}

/// Indices of the set slots of `day`.
pub fn set_slots(bitmap: &SlotBitmap, day: Day) -> Vec<usize> {
    SlotIndex::all()
        .filter(|s| bitmap.get(day, *s))
        .map(SlotIndex::get)
        .collect()
}
