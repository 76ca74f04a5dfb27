//! Common helpers for slotweek-schedule integration tests.

use chrono::NaiveDate;
use slotweek_core::{Day, SlotIndex};
use slotweek_editor::{PointerEvent, RecordingHost};
use slotweek_schedule::{AvailabilityForm, ScheduleBuilder, ScheduleType};

/// Shorthand for a checked slot index.
pub fn slot(i: usize) -> SlotIndex {
    SlotIndex::new(i).expect("slot in range")
}

/// Shorthand for a calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Fields that pass validation.
pub fn valid_fields() -> ScheduleBuilder {
    ScheduleBuilder::new()
        .with_organization("Chess Club")
        .with_facility(3)
        .with_schedule_type(ScheduleType::Club)
        .with_validity(date(2026, 3, 2), date(2026, 6, 26))
}

/// A form carrying [`valid_fields`] and an empty grid.
pub fn blank_form() -> AvailabilityForm<RecordingHost> {
    AvailabilityForm::new(RecordingHost::new()).with_fields(valid_fields())
}

/// Drags across `from..=to` on `day`.
pub fn paint(form: &mut AvailabilityForm<RecordingHost>, day: Day, from: usize, to: usize) {
    form.dispatch(PointerEvent::Down {
        day,
        slot: slot(from),
    });
    form.dispatch(PointerEvent::Enter { day, slot: slot(to) });
    form.dispatch(PointerEvent::Up);
}

/// Clicks a single cell.
pub fn click(form: &mut AvailabilityForm<RecordingHost>, day: Day, i: usize) {
    form.dispatch(PointerEvent::Down { day, slot: slot(i) });
    form.dispatch(PointerEvent::Up);
}
