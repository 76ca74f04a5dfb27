//! Error types for slotweek-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for slotweek-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in slotweek-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be resolved, read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file did not parse
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Error from slotweek-editor
    #[error("Editor error: {0}")]
    Editor(#[from] slotweek_editor::Error),

    /// Error from slotweek-schedule
    #[error("{0}")]
    Schedule(#[from] slotweek_schedule::Error),
}

impl Error {
    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates a parse error for `path`.
    pub fn parse(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}

impl From<slotweek_schedule::ValidationError> for Error {
    fn from(err: slotweek_schedule::ValidationError) -> Self {
        Error::Schedule(err.into())
    }
}
