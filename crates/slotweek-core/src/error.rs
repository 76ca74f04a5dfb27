//! Error types for the slot grid.

/// Errors raised when converting raw input into grid values.
///
/// Every operation on an already-constructed [`SlotIndex`](crate::SlotIndex)
/// or [`SlotBitmap`](crate::SlotBitmap) is total; these errors only surface
/// at the edges where integers and strings enter the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A slot index outside `[0, TOTAL_SLOTS)`.
    #[error("Slot {slot} is out of range (0..{total})")]
    SlotOutOfRange {
        /// The offending index
        slot: usize,
        /// Number of slots in a day
        total: usize,
    },

    /// A clock time that could not be parsed as `HH:MM`.
    #[error("Invalid time '{input}': expected HH:MM")]
    InvalidTime {
        /// Raw input
        input: String,
    },

    /// A well-formed clock time that does not sit on the grid.
    #[error("Time {time} is not on the 30-minute grid between 08:00 and 22:00")]
    TimeOffGrid {
        /// Normalized `HH:MM` rendering of the time
        time: String,
    },

    /// A weekday name that matches none of the canonical tags.
    #[error("Unknown day: {input}")]
    UnknownDay {
        /// Raw input
        input: String,
    },

    /// A range whose end does not lie after its start.
    #[error("Empty time range: {start} - {end}")]
    EmptyRange {
        /// Start time
        start: String,
        /// End time
        end: String,
    },
}

/// Convenience `Result` type alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-time error.
    pub fn invalid_time<S: Into<String>>(input: S) -> Self {
        Error::InvalidTime {
            input: input.into(),
        }
    }

    /// Creates a new unknown-day error.
    pub fn unknown_day<S: Into<String>>(input: S) -> Self {
        Error::UnknownDay {
            input: input.into(),
        }
    }
}
