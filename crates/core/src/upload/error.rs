//! Upload error types.

use thiserror::Error;

use filedrop_shared::AppError;

use crate::storage::StorageError;

/// Upload operation errors.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request carried no files at all.
    #[error("no files were provided")]
    EmptyBatch,

    /// One file exceeded the per-file size ceiling.
    #[error("file size {size} bytes exceeds maximum allowed {max} bytes")]
    PayloadTooLarge {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl UploadError {
    /// Create a payload too large error.
    #[must_use]
    pub fn payload_too_large(size: u64, max: u64) -> Self {
        Self::PayloadTooLarge { size, max }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::EmptyBatch => Self::Validation(err.to_string()),
            UploadError::PayloadTooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            UploadError::Storage(storage) => Self::from(storage),
        }
    }
}
