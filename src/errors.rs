//! Error types for report summarization.
//!
//! Only failures that make a summary impossible are represented here. Absent
//! categories, audits, titles, scores and display values are not errors: the
//! report module degrades them to a placeholder instead.
//!
//! # Example
//!
//! ```rust
//! use lighthouse_summary::errors::SummaryError;
//!
//! let err = SummaryError::not_an_object("lighthouse-report.json");
//! assert!(err.to_string().contains("lighthouse-report.json"));
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a summary run.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The report file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report content is not valid JSON
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The report parsed, but its root is an array, string or scalar
    #[error("{} does not contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    /// The configuration file could not be read or deserialized
    #[error("invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl SummaryError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn not_an_object(path: impl Into<PathBuf>) -> Self {
        Self::NotAnObject { path: path.into() }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
