//! Store errors

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File named for one date holds another date's record.
    #[error("Record {path} holds date {found}, expected {expected}")]
    DateMismatch {
        path: PathBuf,
        expected: NaiveDate,
        found: NaiveDate,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Stable machine code, matching the other subsystems.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "ZEN_STORE_IO",
            Self::Json { .. } => "ZEN_STORE_MALFORMED",
            Self::DateMismatch { .. } => "ZEN_STORE_DATE_MISMATCH",
        }
    }
}
