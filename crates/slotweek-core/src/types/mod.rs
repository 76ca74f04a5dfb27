//! Core types for the weekly slot grid.

mod bitmap;
mod day;
mod proptests;
mod slot;
mod time_range;

pub use bitmap::{DayRow, SlotBitmap};
pub use day::Day;
pub use slot::{
    slot_for_time, slot_to_time, SlotBoundary, SlotIndex, END_HOUR, END_OF_DAY, SLOTS_PER_HOUR,
    SLOT_MINUTES, START_HOUR, TOTAL_SLOTS,
};
pub use time_range::TimeRange;
