//! Error types for XAsset compilation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {0}: {1}")]
    Serialize(String, #[source] serde_json::Error),

    /// A `&&1` template could not be filled for a record.
    #[error("Template substitution failed for {record}: {reason}")]
    Template { record: String, reason: &'static str },

    #[error("Missing required field '{column}' for {record}")]
    MissingField {
        record: String,
        column: &'static str,
    },

    #[error("Value of '{column}' out of range for {record}")]
    OutOfRange {
        record: String,
        column: &'static str,
    },

    /// A reference string did not encode the data it is expected to carry.
    #[error("Malformed reference '{reference}': expected {expected}")]
    MalformedRef {
        reference: String,
        expected: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only invalidates a single record.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Error::Template { .. }
                | Error::MissingField { .. }
                | Error::OutOfRange { .. }
                | Error::MalformedRef { .. }
        )
    }
}
