//! The completed, submission-ready schedule.

use chrono::NaiveDate;
use slotweek_core::{Day, SlotBitmap, TimeRange};

use crate::payload::{CreateScheduleRequest, ScheduleEntry};
use crate::types::{FacilityId, ScheduleType};

/// A validated weekly schedule with every day compressed into ranges.
///
/// Drafts are immutable. Building one again from the same bitmap and form
/// fields gives an equal draft, so a failed submission can be retried by
/// rebuilding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub(crate) organization: String,
    pub(crate) facility_id: FacilityId,
    pub(crate) schedule_type: ScheduleType,
    pub(crate) valid_start_date: NaiveDate,
    pub(crate) valid_end_date: NaiveDate,
    pub(crate) per_day: Vec<(Day, Vec<TimeRange>)>,
}

impl ScheduleDraft {
    /// Organization holding the reservation.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Facility being scheduled.
    pub fn facility_id(&self) -> FacilityId {
        self.facility_id
    }

    /// Purpose of the reservation.
    pub fn schedule_type(&self) -> ScheduleType {
        self.schedule_type
    }

    /// First date the schedule applies.
    pub fn valid_start_date(&self) -> NaiveDate {
        self.valid_start_date
    }

    /// Last date the schedule applies.
    pub fn valid_end_date(&self) -> NaiveDate {
        self.valid_end_date
    }

    /// Compressed ranges of one day, ascending.
    pub fn ranges(&self, day: Day) -> &[TimeRange] {
        self.per_day
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, ranges)| ranges.as_slice())
            .unwrap_or(&[])
    }

    /// Every day in canonical order with its ranges.
    pub fn per_day(&self) -> impl Iterator<Item = (Day, &[TimeRange])> {
        self.per_day
            .iter()
            .map(|(day, ranges)| (*day, ranges.as_slice()))
    }

    /// Total number of ranges across the week.
    pub fn range_count(&self) -> usize {
        self.per_day.iter().map(|(_, ranges)| ranges.len()).sum()
    }

    /// One schedule entry per range, by day then start time.
    pub fn entries(&self) -> Vec<ScheduleEntry> {
        self.per_day()
            .flat_map(|(day, ranges)| {
                ranges
                    .iter()
                    .map(move |range| ScheduleEntry::from_range(day, range))
            })
            .collect()
    }

    /// Replays the draft's ranges onto an empty bitmap.
    pub fn to_bitmap(&self) -> SlotBitmap {
        SlotBitmap::from_ranges(
            self.per_day()
                .flat_map(|(day, ranges)| ranges.iter().map(move |range| (day, *range))),
        )
    }

    /// Request body for the creation endpoint.
    pub fn to_request(&self) -> CreateScheduleRequest {
        CreateScheduleRequest {
            organization: self.organization.clone(),
            schedule_type: self.schedule_type,
            facility_id: self.facility_id,
            schedules: self.entries(),
            valid_start_date: self.valid_start_date,
            valid_end_date: self.valid_end_date,
        }
    }
}
