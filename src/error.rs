//! Error types for dialeval.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dialeval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for dialeval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of an annotation file is not valid JSON.
    #[error("Failed to parse {} line {line}: {message}", .path.display())]
    Parse {
        /// Annotation file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// A line parsed as JSON but lacks a usable `sample_id` or `task_type`.
    #[error("Invalid record in {} line {line}: {message}", .path.display())]
    InvalidRecord {
        /// Annotation file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the record.
        message: String,
    },

    /// A task name that is not one of the scored tasks.
    #[error("Unknown task '{0}' (valid tasks: {valid})", valid = crate::Task::names().join(", "))]
    UnknownTask(String),

    /// The TOML config file is unreadable or invalid.
    #[error("Config error in {}: {message}", .path.display())]
    Config {
        /// Config file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON parse error for `path` at `line`.
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid record error for `path` at `line`.
    pub fn invalid_record(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Error::InvalidRecord {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an unknown task error.
    pub fn unknown_task(name: impl Into<String>) -> Self {
        Error::UnknownTask(name.into())
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
