//! Storage error types.

use thiserror::Error;

use filedrop_shared::AppError;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing an object failed.
    #[error("failed to store object: {0}")]
    Write(String),

    /// Listing stored objects failed.
    #[error("failed to list objects: {0}")]
    List(String),

    /// Deleting an object failed.
    #[error("failed to delete object: {0}")]
    Delete(String),

    /// Object not found in storage.
    #[error("object not found: {key}")]
    NotFound {
        /// Storage key that was not found.
        key: String,
    },

    /// Storage key is malformed or unsafe.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Any other backend operation failed (URL signing, metadata probe).
    #[error("storage operation failed: {0}")]
    Operation(String),

    /// Backend configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Create a write error.
    #[must_use]
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Create a list error.
    #[must_use]
    pub fn list(msg: impl Into<String>) -> Self {
        Self::List(msg.into())
    }

    /// Create a delete error.
    #[must_use]
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::Delete(msg.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an invalid key error.
    #[must_use]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { key } => Self::NotFound(key),
            StorageError::InvalidKey(msg) => Self::Validation(msg),
            StorageError::Configuration(msg) => Self::Internal(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}
