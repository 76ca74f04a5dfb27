//! Error types for schedule assembly and submission.

use chrono::NaiveDate;

/// A form field that blocks building a draft.
///
/// Validation is local and synchronous; when it fails no draft exists and
/// nothing is submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Organization is blank.
    #[error("Organization is required")]
    EmptyOrganization,

    /// No facility picked.
    #[error("A facility must be selected")]
    MissingFacility,

    /// Validity window has no start.
    #[error("Valid start date is required")]
    MissingStartDate,

    /// Validity window has no end.
    #[error("Valid end date is required")]
    MissingEndDate,

    /// Validity window does not run forward.
    #[error("Valid start date {start} must be before valid end date {end}")]
    InvertedDateRange {
        /// Start of the window
        start: NaiveDate,
        /// End of the window
        end: NaiveDate,
    },

    /// No slot selected on any day.
    #[error("Select at least one time slot")]
    EmptySelection,
}

impl ValidationError {
    /// Name of the payload field at fault.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyOrganization => "organization",
            ValidationError::MissingFacility => "facilityId",
            ValidationError::MissingStartDate => "validStartDate",
            ValidationError::MissingEndDate | ValidationError::InvertedDateRange { .. } => {
                "validEndDate"
            }
            ValidationError::EmptySelection => "schedules",
        }
    }
}

/// Errors that can occur while building or submitting a schedule.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The form did not validate.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Grid value could not be parsed (stored payloads, form input).
    #[error("Grid error: {0}")]
    Core(#[from] slotweek_core::Error),

    /// Schedule type outside `CLUB | SEMINAR | MEETING | OTHER`.
    #[error("Unknown schedule type: {input}")]
    UnknownScheduleType {
        /// Raw input
        input: String,
    },

    /// The creation endpoint rejected or failed the request.
    #[error("Submission failed: {message}")]
    Submission {
        /// Human-readable error message
        message: String,
        /// Whether retrying the same draft may succeed
        retryable: bool,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for schedule operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same draft may succeed.
    ///
    /// Only transient submission failures qualify; the draft itself is
    /// rebuilt deterministically from the bitmap on each attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Submission { retryable, .. } => *retryable,
            Error::Validation(_) => false,
            Error::Core(_) => false,
            Error::UnknownScheduleType { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a retryable submission error.
    pub fn submission<S: Into<String>>(message: S) -> Self {
        Error::Submission {
            message: message.into(),
            retryable: true,
        }
    }

    /// Creates a submission error the endpoint will keep rejecting.
    pub fn submission_rejected<S: Into<String>>(message: S) -> Self {
        Error::Submission {
            message: message.into(),
            retryable: false,
        }
    }

    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}
