//! TOML form files: the metadata half of a schedule.
//!
//! ```toml
//! organization = "Chess Club"
//! facility_id = 3
//! schedule_type = "club"
//! valid_start_date = "2026-03-02"
//! valid_end_date = "2026-06-26"
//! ```
//!
//! Missing fields are left empty so validation can name them.

use chrono::NaiveDate;
use serde::Deserialize;
use slotweek_schedule::{ScheduleBuilder, ScheduleType};
use std::path::Path;

use crate::error::{Error, Result};

/// Parsed form file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormFile {
    /// Organization holding the reservation
    pub organization: String,
    /// Facility id; `0` is treated as unset
    pub facility_id: Option<u64>,
    /// Schedule type, case-insensitive
    pub schedule_type: Option<String>,
    /// First valid date, `YYYY-MM-DD`
    pub valid_start_date: Option<NaiveDate>,
    /// Last valid date, `YYYY-MM-DD`
    pub valid_end_date: Option<NaiveDate>,
}

impl FormFile {
    /// Reads a form file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::parse(&content).map_err(|e| Error::parse(path, e))
    }

    /// Parses form TOML.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Copies the fields into a builder.
    pub fn to_builder(&self) -> Result<ScheduleBuilder> {
        let schedule_type = match &self.schedule_type {
            Some(raw) => raw.parse::<ScheduleType>()?,
            None => ScheduleType::default(),
        };

        let mut builder = ScheduleBuilder::new().with_schedule_type(schedule_type);
        builder.set_organization(self.organization.clone());
        builder.set_facility(self.facility_id.filter(|id| *id != 0).map(Into::into));
        builder.set_valid_start_date(self.valid_start_date);
        builder.set_valid_end_date(self.valid_end_date);
        Ok(builder)
    }
}
