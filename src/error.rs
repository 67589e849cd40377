//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit is not on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// Pages must hold at least one record
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// Reading or writing the store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur when loading or saving the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No store exists at the configured path yet
    #[error("Store not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored record sits under a key other than its own name
    #[error("Stored record {name:?} is keyed as {key:?}")]
    KeyMismatch { key: String, name: String },

    /// Store contents could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
