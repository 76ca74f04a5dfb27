#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Slotweek Core
//!
//! The weekly availability grid: seven day rows of 30-minute slots between
//! 08:00 and 22:00, conversion between slot indices and clock times, and the
//! compressor that turns a row of flags into the minimal list of time ranges.

pub mod compress;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use compress::{compress_day, compress_row, compress_week, preview_lines};
pub use error::{Error, Result};
pub use types::{
    slot_for_time, slot_to_time, Day, DayRow, SlotBitmap, SlotBoundary, SlotIndex, TimeRange,
    END_HOUR, END_OF_DAY, SLOTS_PER_HOUR, SLOT_MINUTES, START_HOUR, TOTAL_SLOTS,
};
