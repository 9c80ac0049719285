//! Result and error types for the core library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A dotted field path that does not name a leaf of the user record.
    /// The set of legal paths is closed, so this always points at a bug in
    /// whatever built the path string.
    #[error("Unknown field path: {0}")]
    UnknownFieldPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Every identifier up to `u64::MAX` has been handed out or reserved
    #[error("No user identifiers left to allocate")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create an unknown field path error
    pub fn unknown_field_path(path: impl Into<String>) -> Self {
        Self::UnknownFieldPath(path.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of handing a finalized record to an acceptance callback
///
/// The core never acts on a failed acceptance; this only exists so the
/// caller can report what happened (e.g. as `--json` output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission<T> {
    pub record: T,
    pub accepted: bool,
    pub error: Option<String>,
}

impl<T> Submission<T> {
    pub fn accepted(record: T) -> Self {
        Self {
            record,
            accepted: true,
            error: None,
        }
    }

    pub fn rejected(record: T, error: impl Into<String>) -> Self {
        Self {
            record,
            accepted: false,
            error: Some(error.into()),
        }
    }
}
