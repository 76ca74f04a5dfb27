//! Slot indices and slot ↔ clock-time conversion.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// First bookable hour of the day.
pub const START_HOUR: u32 = 8;

/// Hour at which the last slot closes.
pub const END_HOUR: u32 = 22;

/// Number of slots per hour.
pub const SLOTS_PER_HOUR: usize = 2;

/// Length of one slot in minutes.
pub const SLOT_MINUTES: u32 = 60 / SLOTS_PER_HOUR as u32;

/// Number of slots in one day row.
pub const TOTAL_SLOTS: usize = (END_HOUR - START_HOUR) as usize * SLOTS_PER_HOUR;

/// Closing boundary of the last slot.
pub const END_OF_DAY: &str = "22:00";

/// A checked index into a day row, always in `[0, TOTAL_SLOTS)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// The 08:00 slot.
    pub const FIRST: SlotIndex = SlotIndex(0);

    /// The 21:30 slot.
    pub const LAST: SlotIndex = SlotIndex(TOTAL_SLOTS as u8 - 1);

    /// Creates a slot index, rejecting values outside the day.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotweek_core::SlotIndex;
    ///
    /// assert_eq!(SlotIndex::new(4).unwrap().get(), 4);
    /// assert!(SlotIndex::new(28).is_err());
    /// ```
    pub fn new(slot: usize) -> Result<Self> {
        if slot < TOTAL_SLOTS {
            Ok(Self(slot as u8))
        } else {
            Err(Error::SlotOutOfRange {
                slot,
                total: TOTAL_SLOTS,
            })
        }
    }

    /// Returns the raw index.
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterates over every slot of a day in order.
    pub fn all() -> impl DoubleEndedIterator<Item = SlotIndex> + ExactSizeIterator {
        (0..TOTAL_SLOTS as u8).map(SlotIndex)
    }

    /// Clock time at which this slot opens, as `HH:MM`.
    pub fn time(self) -> String {
        slot_to_time(self)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = Error;

    fn try_from(slot: usize) -> Result<Self> {
        Self::new(slot)
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> Self {
        slot.get()
    }
}

/// Exclusive end of a time range.
///
/// A run that reaches the last slot closes at [`END_OF_DAY`] rather than at a
/// slot index, so the out-of-domain `slot_to_time(TOTAL_SLOTS)` can never be
/// asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotBoundary {
    /// The range closes where this slot opens.
    Slot(SlotIndex),
    /// The range closes at the end of the bookable day.
    EndOfDay,
}

impl SlotBoundary {
    /// Boundary position in slot units, `TOTAL_SLOTS` for end of day.
    pub const fn index(self) -> usize {
        match self {
            SlotBoundary::Slot(slot) => slot.get(),
            SlotBoundary::EndOfDay => TOTAL_SLOTS,
        }
    }

    /// Builds a boundary from a position in `[0, TOTAL_SLOTS]`.
    pub fn from_index(index: usize) -> Result<Self> {
        if index == TOTAL_SLOTS {
            Ok(SlotBoundary::EndOfDay)
        } else {
            SlotIndex::new(index).map(SlotBoundary::Slot)
        }
    }

    /// Clock time of this boundary, as `HH:MM`.
    pub fn time(self) -> String {
        match self {
            SlotBoundary::Slot(slot) => slot_to_time(slot),
            SlotBoundary::EndOfDay => END_OF_DAY.to_string(),
        }
    }
}

/// Converts a slot index to the clock time at which it opens.
///
/// # Examples
///
/// ```
/// use slotweek_core::{slot_to_time, SlotIndex};
///
/// assert_eq!(slot_to_time(SlotIndex::FIRST), "08:00");
/// assert_eq!(slot_to_time(SlotIndex::new(3).unwrap()), "09:30");
/// assert_eq!(slot_to_time(SlotIndex::LAST), "21:30");
/// ```
pub fn slot_to_time(slot: SlotIndex) -> String {
    let hours = START_HOUR as usize + slot.get() / SLOTS_PER_HOUR;
    let minutes = (slot.get() % SLOTS_PER_HOUR) * SLOT_MINUTES as usize;
    format!("{hours:02}:{minutes:02}")
}

/// Converts an `HH:MM` clock time back to a boundary on the grid.
///
/// `"22:00"` maps to [`SlotBoundary::EndOfDay`]. Times off the 30-minute
/// grid or outside 08:00–22:00 are rejected.
pub fn slot_for_time(input: &str) -> Result<SlotBoundary> {
    let time = NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| Error::invalid_time(input))?;

    let minutes = time.hour() * 60 + time.minute();
    let start = START_HOUR * 60;
    let end = END_HOUR * 60;
    if minutes < start || minutes > end || (minutes - start) % SLOT_MINUTES != 0 {
        return Err(Error::TimeOffGrid {
            time: time.format("%H:%M").to_string(),
        });
    }

    SlotBoundary::from_index(((minutes - start) / SLOT_MINUTES) as usize)
}
