//! Per-day availability flags.

use std::ops::RangeInclusive;

use crate::types::day::Day;
use crate::types::slot::{SlotIndex, TOTAL_SLOTS};
use crate::types::time_range::TimeRange;

/// One day's availability flags, one per slot.
pub type DayRow = [bool; TOTAL_SLOTS];

/// Availability flags for the whole week: seven fixed-size rows.
///
/// Rows are arrays, so a row can never be resized and always holds exactly
/// [`TOTAL_SLOTS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBitmap {
    rows: [DayRow; 7],
}

impl SlotBitmap {
    /// Creates an all-false bitmap.
    pub fn new() -> Self {
        Self {
            rows: [[false; TOTAL_SLOTS]; 7],
        }
    }

    /// Rebuilds a bitmap by marking every given range on its day.
    ///
    /// Overlapping or adjacent ranges simply merge.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (Day, TimeRange)>,
    {
        let mut bitmap = Self::new();
        for (day, range) in ranges {
            bitmap.mark_range(day, &range);
        }
        bitmap
    }

    /// Returns the flag at `(day, slot)`.
    pub fn get(&self, day: Day, slot: SlotIndex) -> bool {
        self.rows[day.index()][slot.get()]
    }

    /// Sets the flag at `(day, slot)`.
    pub fn set(&mut self, day: Day, slot: SlotIndex, value: bool) {
        self.rows[day.index()][slot.get()] = value;
    }

    /// Sets every flag of `day` in the inclusive span `lo..=hi`.
    ///
    /// An inverted span is normalized, so callers can pass anchor and pointer
    /// in either order.
    pub fn fill(&mut self, day: Day, span: RangeInclusive<SlotIndex>, value: bool) {
        let (a, b) = span.into_inner();
        let (lo, hi) = (a.min(b), a.max(b));
        self.rows[day.index()][lo.get()..=hi.get()].fill(value);
    }

    /// Marks every slot covered by `range` on `day` as available.
    pub fn mark_range(&mut self, day: Day, range: &TimeRange) {
        self.rows[day.index()][range.slots()].fill(true);
    }

    /// Read access to one day's row.
    pub fn row(&self, day: Day) -> &DayRow {
        &self.rows[day.index()]
    }

    /// Replaces one day's row wholesale.
    pub fn set_row(&mut self, day: Day, row: DayRow) {
        self.rows[day.index()] = row;
    }

    /// Clears every flag of every day.
    pub fn clear(&mut self) {
        self.rows = [[false; TOTAL_SLOTS]; 7];
    }

    /// Clears every flag of one day.
    pub fn clear_day(&mut self, day: Day) {
        self.rows[day.index()] = [false; TOTAL_SLOTS];
    }

    /// Returns `true` if no slot of any day is set.
    pub fn is_empty(&self) -> bool {
        Day::ALL.iter().all(|day| self.is_day_empty(*day))
    }

    /// Returns `true` if no slot of `day` is set.
    pub fn is_day_empty(&self, day: Day) -> bool {
        !self.rows[day.index()].contains(&true)
    }

    /// Number of set slots across the week.
    pub fn selected_count(&self) -> usize {
        self.rows.iter().flatten().filter(|flag| **flag).count()
    }

    /// Days with at least one set slot, in canonical order.
    pub fn days_with_selection(&self) -> impl Iterator<Item = Day> + '_ {
        Day::ALL
            .into_iter()
            .filter(move |day| !self.is_day_empty(*day))
    }
}

impl Default for SlotBitmap {
    fn default() -> Self {
        Self::new()
    }
}
