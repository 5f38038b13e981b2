//! Core error types for focusforge-core.
//!
//! This module defines the error hierarchy using thiserror. A snapshot that
//! fails to decode degrades to defaults; a store that cannot be read is
//! surfaced as [`CoreError::Storage`] so callers never overwrite it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusforge-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persisted snapshot could not be decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the SQLite-backed snapshot store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(#[source] std::io::Error),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Reasons a persisted snapshot is rejected. The reconciler falls back to
/// default state on any of these.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Not valid JSON at all
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON whose root is not an object
    #[error("Snapshot root is not a JSON object")]
    NotAnObject,

    /// Written by a newer build
    #[error("Unsupported snapshot schema version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u64, supported: u32 },

    /// A known field is present but has the wrong shape
    #[error("Snapshot field '{field}' has an unexpected shape: {source}")]
    ShapeMismatch {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn unknown_variant(field: &str, value: &str, expected: &str) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("'{value}' is not one of {expected}"),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) if e.code == rusqlite::ErrorCode::DatabaseLocked => {
                StorageError::Locked
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
