//! Error types for snap2know.
//!
//! This module defines the crate-level error type used by dataset loading,
//! configuration and the controller. User-facing lookup failures (no selection,
//! unrecognized command) live in [`crate::resolver::LookupError`] because they
//! are displayed, not propagated.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for snap2know operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Dataset Errors ===
    /// Failed to read a dataset file.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetRead {
        /// Path to the dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the record schema.
    #[error("failed to parse dataset from {origin}: {source}")]
    DatasetParse {
        /// Where the dataset came from (a path or `<embedded>`).
        origin: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The requested equipment id is not in the dataset.
    #[error("unknown equipment '{id}'")]
    UnknownEquipment {
        /// The id that was looked up.
        id: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for snap2know operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new unknown equipment error.
    #[must_use]
    pub fn unknown_equipment(id: impl Into<String>) -> Self {
        Self::UnknownEquipment { id: id.into() }
    }

    /// Check if this error is an unknown equipment lookup.
    #[must_use]
    pub fn is_unknown_equipment(&self) -> bool {
        matches!(self, Self::UnknownEquipment { .. })
    }
}
