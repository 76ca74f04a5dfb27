//! How a drag treats cells it has already painted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// What `extend` does with cells outside the current anchor-to-pointer span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendPolicy {
    /// Leave them alone.
    ///
    /// Cells painted by an earlier, larger span stay painted when the
    /// pointer retreats toward the anchor.
    #[default]
    Sticky,

    /// Put them back to their value at the start of the drag.
    ///
    /// The row always shows the pre-drag state plus exactly the current
    /// span.
    Restore,
}

impl fmt::Display for ExtendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendPolicy::Sticky => write!(f, "sticky"),
            ExtendPolicy::Restore => write!(f, "restore"),
        }
    }
}

impl std::str::FromStr for ExtendPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sticky" => Ok(ExtendPolicy::Sticky),
            "restore" => Ok(ExtendPolicy::Restore),
            _ => Err(Error::UnknownExtendPolicy(s.to_string())),
        }
    }
}
