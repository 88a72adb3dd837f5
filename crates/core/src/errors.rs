//! Core error types for the finapp application.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures (filesystem, browser storage, etc.) are converted to
//! [`StoreError`] by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for key-value store operations.
///
/// Uses `String` payloads so concrete backends can convert their own error
/// types without leaking backend dependencies into the core.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing medium cannot be reached at all.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// A read or write against the backing medium failed.
    #[error("Storage I/O failed: {0}")]
    Io(String),

    /// A value could not be serialized before writing.
    #[error("Failed to serialize value for key '{key}': {message}")]
    Serialization { key: String, message: String },

    /// A stored collection envelope declares a version newer than this build
    /// understands. Never silently dropped: the caller must decide.
    #[error("Key '{key}' uses unsupported schema version {version}")]
    UnsupportedSchemaVersion { key: String, version: u32 },

    /// Optimistic concurrency check failed: another writer persisted a newer
    /// revision between our load and save.
    #[error("Revision conflict on key '{key}': expected {expected}, found {found}")]
    RevisionConflict {
        key: String,
        expected: u64,
        found: u64,
    },

    /// The key contains characters the backend refuses to map to its medium.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Session and identity errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no user is logged in")]
    NotAuthenticated,
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
