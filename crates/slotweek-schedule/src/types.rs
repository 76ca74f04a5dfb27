//! Form field types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// What the facility is reserved for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleType {
    /// Club activity
    #[default]
    Club,
    /// Seminar
    Seminar,
    /// Meeting
    Meeting,
    /// Anything else
    Other,
}

impl ScheduleType {
    /// Upper-case tag sent to the endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScheduleType::Club => "CLUB",
            ScheduleType::Seminar => "SEMINAR",
            ScheduleType::Meeting => "MEETING",
            ScheduleType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScheduleType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLUB" => Ok(ScheduleType::Club),
            "SEMINAR" => Ok(ScheduleType::Seminar),
            "MEETING" => Ok(ScheduleType::Meeting),
            "OTHER" => Ok(ScheduleType::Other),
            _ => Err(Error::UnknownScheduleType {
                input: s.to_string(),
            }),
        }
    }
}

/// Identifier of a facility, as issued by the facility catalogue.
///
/// Catalogue ids are positive; `0` means no facility was picked and fails
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(u64);

impl FacilityId {
    /// Wraps a raw facility id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FacilityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
