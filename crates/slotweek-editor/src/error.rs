//! Error types for slotweek-editor

use thiserror::Error;

/// Result type alias for slotweek-editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in slotweek-editor
///
/// Drag operations themselves never fail; these cover parsing editor
/// settings from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Extend policy name outside `sticky` / `restore`
    #[error("Unknown extend policy: {0} (expected 'sticky' or 'restore')")]
    UnknownExtendPolicy(String),
}
