//! Local disk storage backend.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use opendal::{ErrorKind, Operator, services};
use tracing::debug;

use super::backend::{FileDescriptor, StorageBackend, UrlIntent};
use super::error::StorageError;
use super::key;
use crate::classify;

/// Storage backend over a local upload directory.
///
/// Preview URLs point at the static-serving prefix; download URLs point at
/// the service route that forces an attachment disposition. Neither
/// expires.
pub struct LocalDiskBackend {
    op: Operator,
    public_base: String,
    download_base: String,
}

impl LocalDiskBackend {
    /// Create a backend rooted at `root`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the operator
    /// cannot be initialized.
    pub async fn new(
        root: &Path,
        public_base: impl Into<String>,
        download_base: impl Into<String>,
    ) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| StorageError::configuration(format!("cannot create upload dir: {e}")))?;

        let builder = services::Fs::default().root(
            root.to_str()
                .ok_or_else(|| StorageError::configuration("invalid upload directory path"))?,
        );

        let op = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self {
            op,
            public_base: public_base.into().trim_end_matches('/').to_string(),
            download_base: download_base.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StorageBackend for LocalDiskBackend {
    async fn persist(&self, original_name: &str, data: Bytes) -> Result<FileDescriptor, StorageError> {
        let storage_key = key::generate_key(original_name);
        let size_bytes = data.len() as u64;
        let content_type = classify::content_type_for(original_name).to_string();

        self.op
            .write(&storage_key, data)
            .await
            .map_err(|e| StorageError::write(e.to_string()))?;

        debug!(key = %storage_key, size_bytes, "stored file on local disk");

        Ok(FileDescriptor {
            key: storage_key,
            original_name: original_name.to_string(),
            size_bytes,
            last_modified: Some(Utc::now()),
            content_type,
        })
    }

    async fn list(&self) -> Result<Vec<FileDescriptor>, StorageError> {
        let entries = self
            .op
            .list("/")
            .await
            .map_err(|e| StorageError::list(e.to_string()))?;

        let mut descriptors = Vec::with_capacity(entries.len());
        for entry in entries {
            let meta = self
                .op
                .stat(entry.path())
                .await
                .map_err(|e| StorageError::list(e.to_string()))?;
            if !meta.mode().is_file() {
                continue;
            }

            let storage_key = entry.name().to_string();
            descriptors.push(FileDescriptor {
                original_name: key::display_name(&storage_key).to_string(),
                content_type: classify::content_type_for(&storage_key).to_string(),
                size_bytes: meta.content_length(),
                last_modified: meta
                    .last_modified()
                    .map(|t| chrono::DateTime::<Utc>::from(std::time::SystemTime::from(t))),
                key: storage_key,
            });
        }

        Ok(descriptors)
    }

    async fn delete(&self, storage_key: &str) -> Result<(), StorageError> {
        key::validate_key(storage_key)?;

        // opendal delete is idempotent; probe first so a missing key is
        // reported instead of silently succeeding.
        match self.op.stat(storage_key).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::not_found(storage_key));
            }
            Err(e) => return Err(StorageError::delete(e.to_string())),
        }

        self.op
            .delete(storage_key)
            .await
            .map_err(|e| StorageError::delete(e.to_string()))
    }

    async fn url_for(&self, storage_key: &str, intent: UrlIntent) -> Result<String, StorageError> {
        key::validate_key(storage_key)?;

        let base = match intent {
            UrlIntent::Preview => &self.public_base,
            UrlIntent::Download => &self.download_base,
        };
        Ok(format!("{base}/{storage_key}"))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn backend(dir: &tempfile::TempDir) -> LocalDiskBackend {
        LocalDiskBackend::new(dir.path(), "/uploads", "/download")
            .await
            .expect("backend should initialize")
    }

    #[tokio::test]
    async fn test_persist_then_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        let stored = backend
            .persist("invoice.pdf", Bytes::from_static(b"%PDF-1.4"))
            .await
            .expect("persist should succeed");

        assert_eq!(stored.original_name, "invoice.pdf");
        assert_eq!(stored.size_bytes, 8);
        assert_eq!(stored.content_type, "application/pdf");
        assert!(stored.key.ends_with("_invoice.pdf"));

        let listed = backend.list().await.expect("list should succeed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].key, stored.key);
        assert_eq!(listed[0].size_bytes, 8);
        assert_eq!(listed[0].original_name, "invoice.pdf");
    }

    #[tokio::test]
    async fn test_list_counts_every_persist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        for i in 0..5 {
            backend
                .persist(&format!("file-{i}.txt"), Bytes::from_static(b"data"))
                .await
                .expect("persist should succeed");
        }

        let listed = backend.list().await.expect("list should succeed");
        assert_eq!(listed.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_existing_then_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        let stored = backend
            .persist("note.txt", Bytes::from_static(b"hello"))
            .await
            .expect("persist should succeed");

        backend.delete(&stored.key).await.expect("delete should succeed");
        assert!(backend.list().await.expect("list").is_empty());

        let err = backend.delete(&stored.key).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_rejects_traversal_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        let err = backend.delete("../escape.txt").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_url_for_intents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        let preview = backend
            .url_for("1700_photo.png", UrlIntent::Preview)
            .await
            .expect("preview url");
        let download = backend
            .url_for("1700_photo.png", UrlIntent::Download)
            .await
            .expect("download url");

        assert_eq!(preview, "/uploads/1700_photo.png");
        assert_eq!(download, "/download/1700_photo.png");
    }

    #[tokio::test]
    async fn test_persist_sanitizes_traversal_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = backend(&dir).await;

        let stored = backend
            .persist("../../etc/passwd", Bytes::from_static(b"x"))
            .await
            .expect("persist should succeed");

        assert!(stored.key.ends_with("_passwd"));
        let listed = backend.list().await.expect("list");
        assert_eq!(listed.len(), 1);
    }
}
