//! Half-open time ranges in slot units.

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::types::slot::{slot_for_time, SlotBoundary, SlotIndex};

/// A half-open run of slots `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: SlotIndex,
    end: SlotBoundary,
}

impl TimeRange {
    /// Creates a range, rejecting empty or inverted ones.
    pub fn new(start: SlotIndex, end: SlotBoundary) -> Result<Self> {
        if end.index() <= start.get() {
            return Err(Error::EmptyRange {
                start: start.time(),
                end: end.time(),
            });
        }
        Ok(Self { start, end })
    }

    // Callers guarantee `end` lies strictly after `start`.
    pub(crate) fn from_run(start: SlotIndex, end: SlotBoundary) -> Self {
        debug_assert!(end.index() > start.get());
        Self { start, end }
    }

    /// Parses a range from two `HH:MM` clock times.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotweek_core::TimeRange;
    ///
    /// let range = TimeRange::from_times("09:00", "11:00").unwrap();
    /// assert_eq!(range.slots(), 2..6);
    /// ```
    pub fn from_times(start: &str, end: &str) -> Result<Self> {
        let start_boundary = slot_for_time(start)?;
        let end_boundary = slot_for_time(end)?;
        match start_boundary {
            SlotBoundary::Slot(slot) => Self::new(slot, end_boundary),
            SlotBoundary::EndOfDay => Err(Error::EmptyRange {
                start: start_boundary.time(),
                end: end_boundary.time(),
            }),
        }
    }

    /// First slot of the range.
    pub fn start(&self) -> SlotIndex {
        self.start
    }

    /// Exclusive end of the range.
    pub fn end(&self) -> SlotBoundary {
        self.end
    }

    /// Slot indices covered, as a half-open `Range`.
    pub fn slots(&self) -> Range<usize> {
        self.start.get()..self.end.index()
    }

    /// Number of slots covered.
    pub fn len(&self) -> usize {
        self.end.index() - self.start.get()
    }

    /// Always `false`; a `TimeRange` cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Opening clock time, `HH:MM`.
    pub fn start_time(&self) -> String {
        self.start.time()
    }

    /// Closing clock time, `HH:MM`.
    pub fn end_time(&self) -> String {
        self.end.time()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.start_time(), self.end_time())
    }
}
