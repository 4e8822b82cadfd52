//! Upload types and data structures.

use bytes::Bytes;

use super::error::UploadError;

/// One file received from a multipart request.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    /// User-supplied filename, unsanitized.
    pub original_name: String,
    /// Full file content.
    pub data: Bytes,
}

/// A successfully stored file, as reported back to the uploader.
#[derive(Debug, Clone)]
pub struct UploadResult {
    /// The filename exactly as supplied.
    pub original_name: String,
    /// Storage key the file was persisted under.
    pub key: String,
    /// Preview URL for the stored file.
    pub url: String,
    /// Whether the file renders as an inline image.
    pub is_image: bool,
    /// Derived MIME type.
    pub content_type: String,
}

/// Per-file outcome of a batch upload.
///
/// A failed file never aborts the batch; earlier successes are retained
/// and reported alongside the failure.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The file was persisted.
    Stored(UploadResult),
    /// The file was rejected or the backend failed for it.
    Rejected {
        /// The filename exactly as supplied.
        original_name: String,
        /// Why this file was not stored.
        error: UploadError,
    },
}

impl UploadOutcome {
    /// Whether this outcome is a stored file.
    #[must_use]
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }

    /// The original filename this outcome refers to.
    #[must_use]
    pub fn original_name(&self) -> &str {
        match self {
            Self::Stored(result) => &result.original_name,
            Self::Rejected { original_name, .. } => original_name,
        }
    }
}
