//! Range compression: one day's flags to the minimal list of time ranges.
//!
//! The compressor runs on every live-preview render and once per day at
//! submission. A day is [`TOTAL_SLOTS`](crate::TOTAL_SLOTS) flags, so a single linear scan is
//! cheap enough for the hot path; nothing is cached.

use crate::types::{Day, DayRow, SlotBitmap, SlotBoundary, SlotIndex, TimeRange};

/// Compresses one day row into ordered, disjoint, non-adjacent ranges.
///
/// Every maximal run of set slots yields exactly one range. A run that
/// reaches the last slot closes at the end-of-day boundary.
///
/// # Examples
///
/// ```
/// use slotweek_core::compress::compress_row;
/// use slotweek_core::TOTAL_SLOTS;
///
/// let mut row = [false; TOTAL_SLOTS];
/// row[2..6].fill(true);
/// row[10..14].fill(true);
///
/// let rendered: Vec<String> = compress_row(&row).iter().map(|r| r.to_string()).collect();
/// assert_eq!(rendered, vec!["09:00 – 11:00", "13:00 – 15:00"]);
/// ```
pub fn compress_row(row: &DayRow) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut open: Option<SlotIndex> = None;

    for (slot, &available) in SlotIndex::all().zip(row.iter()) {
        match (open, available) {
            (None, true) => open = Some(slot),
            (Some(start), false) => {
                ranges.push(TimeRange::from_run(start, SlotBoundary::Slot(slot)));
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        ranges.push(TimeRange::from_run(start, SlotBoundary::EndOfDay));
    }

    tracing::trace!(ranges = ranges.len(), "Row compressed");
    ranges
}

/// Compresses the row of `day` in `bitmap`.
pub fn compress_day(bitmap: &SlotBitmap, day: Day) -> Vec<TimeRange> {
    compress_row(bitmap.row(day))
}

/// Compresses every day in canonical order.
///
/// Days without a selection are included with an empty list, so the result
/// always has seven entries.
pub fn compress_week(bitmap: &SlotBitmap) -> Vec<(Day, Vec<TimeRange>)> {
    Day::ALL
        .into_iter()
        .map(|day| (day, compress_day(bitmap, day)))
        .collect()
}

/// Renders the live preview: one line per day that has a selection.
///
/// ```text
/// MONDAY: 09:00 – 11:00, 13:00 – 15:00
/// ```
pub fn preview_lines(bitmap: &SlotBitmap) -> Vec<String> {
    compress_week(bitmap)
        .into_iter()
        .filter(|(_, ranges)| !ranges.is_empty())
        .map(|(day, ranges)| {
            let rendered: Vec<String> = ranges.iter().map(ToString::to_string).collect();
            format!("{day}: {}", rendered.join(", "))
        })
        .collect()
}
