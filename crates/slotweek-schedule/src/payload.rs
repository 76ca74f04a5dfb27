//! Wire form of a schedule-creation request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slotweek_core::{Day, SlotBitmap, TimeRange};

use crate::error::Result;
use crate::types::{FacilityId, ScheduleType};

/// One recurring weekly opening: a day and an `HH:MM` window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Weekday tag, `"MONDAY"`..`"SUNDAY"`
    pub day_of_week: Day,

    /// Opening time, `HH:MM`
    pub rental_start_time: String,

    /// Closing time, `HH:MM`
    pub rental_end_time: String,
}

impl ScheduleEntry {
    /// Builds the entry for one compressed range.
    pub fn from_range(day: Day, range: &TimeRange) -> Self {
        Self {
            day_of_week: day,
            rental_start_time: range.start_time(),
            rental_end_time: range.end_time(),
        }
    }

    /// Parses the entry's window back into grid units.
    pub fn to_range(&self) -> Result<TimeRange> {
        Ok(TimeRange::from_times(
            &self.rental_start_time,
            &self.rental_end_time,
        )?)
    }
}

/// Body handed to the schedule-creation endpoint.
///
/// ```json
/// {
///   "organization": "Chess Club",
///   "scheduleType": "CLUB",
///   "facilityId": 3,
///   "schedules": [
///     { "dayOfWeek": "MONDAY", "rentalStartTime": "09:00", "rentalEndTime": "11:00" }
///   ],
///   "validStartDate": "2026-03-02",
///   "validEndDate": "2026-06-26"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    /// Organization holding the reservation
    pub organization: String,

    /// Purpose of the reservation
    pub schedule_type: ScheduleType,

    /// Facility being scheduled
    pub facility_id: FacilityId,

    /// Weekly openings, ordered by day then start time
    pub schedules: Vec<ScheduleEntry>,

    /// First date the schedule applies
    pub valid_start_date: NaiveDate,

    /// Last date the schedule applies
    pub valid_end_date: NaiveDate,
}

impl CreateScheduleRequest {
    /// Replays the entries onto an empty bitmap.
    ///
    /// Used to reopen a stored schedule in the editor.
    pub fn to_bitmap(&self) -> Result<SlotBitmap> {
        let ranges = self
            .schedules
            .iter()
            .map(|entry| Ok((entry.day_of_week, entry.to_range()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(SlotBitmap::from_ranges(ranges))
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
