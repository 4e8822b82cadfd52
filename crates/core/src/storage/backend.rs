//! Storage backend capability interface.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::error::StorageError;

/// Metadata record for one stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Unique storage identifier, `<ms-timestamp>_<sanitized-name>`.
    pub key: String,
    /// User-supplied filename. Unsanitized at persist time; reconstructed
    /// from the key at list time.
    pub original_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modification time, when the backend reports one.
    pub last_modified: Option<DateTime<Utc>>,
    /// MIME type derived from the file extension.
    pub content_type: String,
}

/// What a generated URL will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlIntent {
    /// URL must be renderable inline (image preview, PDF view).
    Preview,
    /// URL must force an attachment download carrying the original filename.
    Download,
}

/// Capability interface over a file store.
///
/// One backend is constructed at startup and injected into the services;
/// files are immutable once stored, so the interface has no update
/// operation. Callers must treat returned URLs as opaque - they may be
/// time-limited (remote) or permanent (local).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Write `data` under a freshly generated key and return the stored
    /// file's descriptor.
    async fn persist(&self, original_name: &str, data: Bytes) -> Result<FileDescriptor, StorageError>;

    /// Snapshot of all currently stored files. Order is unspecified.
    async fn list(&self) -> Result<Vec<FileDescriptor>, StorageError>;

    /// Remove the object stored under `key`.
    ///
    /// Deleting a missing key yields [`StorageError::NotFound`], never
    /// silent success.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// URL under which the object can be fetched for the given intent.
    async fn url_for(&self, key: &str, intent: UrlIntent) -> Result<String, StorageError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
