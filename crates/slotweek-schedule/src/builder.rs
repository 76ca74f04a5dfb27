//! Assembles a [`ScheduleDraft`] from form fields and the slot bitmap.

use chrono::NaiveDate;
use slotweek_core::{compress_week, SlotBitmap};

use crate::draft::ScheduleDraft;
use crate::error::ValidationError;
use crate::types::{FacilityId, ScheduleType};

/// The metadata half of the schedule form.
///
/// The selection half lives in the bitmap handed to [`build`](Self::build).
/// Fields start empty; validation reports the first one still missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleBuilder {
    organization: String,
    facility_id: Option<FacilityId>,
    schedule_type: ScheduleType,
    valid_start_date: Option<NaiveDate>,
    valid_end_date: Option<NaiveDate>,
}

impl ScheduleBuilder {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organization.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.set_organization(organization);
        self
    }

    /// Sets the facility.
    pub fn with_facility(mut self, facility_id: impl Into<FacilityId>) -> Self {
        self.set_facility(Some(facility_id.into()));
        self
    }

    /// Sets the schedule type.
    pub fn with_schedule_type(mut self, schedule_type: ScheduleType) -> Self {
        self.set_schedule_type(schedule_type);
        self
    }

    /// Sets both ends of the validity window.
    pub fn with_validity(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.set_valid_start_date(Some(start));
        self.set_valid_end_date(Some(end));
        self
    }

    /// Sets the organization.
    pub fn set_organization(&mut self, organization: impl Into<String>) {
        self.organization = organization.into();
    }

    /// Selects or clears the facility.
    pub fn set_facility(&mut self, facility_id: Option<FacilityId>) {
        self.facility_id = facility_id;
    }

    /// Sets the schedule type.
    pub fn set_schedule_type(&mut self, schedule_type: ScheduleType) {
        self.schedule_type = schedule_type;
    }

    /// Sets or clears the first valid date.
    pub fn set_valid_start_date(&mut self, date: Option<NaiveDate>) {
        self.valid_start_date = date;
    }

    /// Sets or clears the last valid date.
    pub fn set_valid_end_date(&mut self, date: Option<NaiveDate>) {
        self.valid_end_date = date;
    }

    /// Organization as entered.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Selected facility.
    pub fn facility_id(&self) -> Option<FacilityId> {
        self.facility_id
    }

    /// Schedule type.
    pub fn schedule_type(&self) -> ScheduleType {
        self.schedule_type
    }

    /// Validity window as entered.
    pub fn validity(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.valid_start_date, self.valid_end_date)
    }

    /// Checks the form against `bitmap` without building anything.
    pub fn validate(&self, bitmap: &SlotBitmap) -> Result<(), ValidationError> {
        self.checked(bitmap).map(|_| ())
    }

    /// Validates, then compresses every day into a draft.
    ///
    /// Days are visited Monday to Sunday; each keeps its ranges in ascending
    /// order, so the draft's entries are deterministic for a given bitmap.
    pub fn build(&self, bitmap: &SlotBitmap) -> Result<ScheduleDraft, ValidationError> {
        let (facility_id, valid_start_date, valid_end_date) =
            self.checked(bitmap).inspect_err(|err| {
                tracing::warn!(field = err.field(), error = %err, "Schedule form invalid");
            })?;

        let draft = ScheduleDraft {
            organization: self.organization.trim().to_string(),
            facility_id,
            schedule_type: self.schedule_type,
            valid_start_date,
            valid_end_date,
            per_day: compress_week(bitmap),
        };

        tracing::info!(
            facility_id = %draft.facility_id,
            ranges = draft.range_count(),
            "Schedule draft built"
        );
        Ok(draft)
    }

    fn checked(
        &self,
        bitmap: &SlotBitmap,
    ) -> Result<(FacilityId, NaiveDate, NaiveDate), ValidationError> {
        if self.organization.trim().is_empty() {
            return Err(ValidationError::EmptyOrganization);
        }
        let facility_id = self
            .facility_id
            .filter(|id| id.get() != 0)
            .ok_or(ValidationError::MissingFacility)?;
        let start = self
            .valid_start_date
            .ok_or(ValidationError::MissingStartDate)?;
        let end = self.valid_end_date.ok_or(ValidationError::MissingEndDate)?;
        if start >= end {
            return Err(ValidationError::InvertedDateRange { start, end });
        }
        if bitmap.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        Ok((facility_id, start, end))
    }
}
