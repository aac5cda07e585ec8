//! # Preference Error Types
//!
//! Error types for preference storage.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PrefsError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError → ApiError (in app) ← "Could not save the list"              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Preference storage errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Reading or writing the preference file failed.
    ///
    /// ## When This Occurs
    /// - Directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file exists but is not a JSON object of strings.
    #[error("Preference file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Values could not be serialized.
    #[error("Failed to serialize preferences: {0}")]
    Serialization(String),

    /// Storage refused the write (`MemoryPreferences::reject_writes`).
    #[error("Preference write rejected: {0}")]
    WriteRejected(String),
}

impl PrefsError {
    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrefsError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(err: serde_json::Error) -> Self {
        PrefsError::Serialization(err.to_string())
    }
}

/// Result type for preference operations.
pub type PrefsResult<T> = Result<T, PrefsError>;
