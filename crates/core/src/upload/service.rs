//! Upload service implementation.

use std::sync::Arc;

use futures::future;
use tracing::{info, warn};

use super::error::UploadError;
use super::types::{IncomingFile, UploadOutcome, UploadResult};
use crate::classify::FileCategory;
use crate::storage::{StorageBackend, UrlIntent};

/// Orchestrates batch uploads against the active storage backend.
pub struct UploadService {
    backend: Arc<dyn StorageBackend>,
    max_file_size: u64,
}

impl UploadService {
    /// Create a new upload service.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, max_file_size: u64) -> Self {
        Self {
            backend,
            max_file_size,
        }
    }

    /// Store a batch of uploaded files.
    ///
    /// Files are persisted concurrently; the returned outcomes preserve the
    /// caller's file order. An oversized or failed file yields a
    /// [`UploadOutcome::Rejected`] for that file only - earlier successes
    /// are never rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::EmptyBatch`] if `files` is empty.
    pub async fn handle_upload(
        &self,
        files: Vec<IncomingFile>,
    ) -> Result<Vec<UploadOutcome>, UploadError> {
        if files.is_empty() {
            return Err(UploadError::EmptyBatch);
        }

        let count = files.len();
        let outcomes = future::join_all(files.into_iter().map(|file| self.store_one(file))).await;

        let stored = outcomes.iter().filter(|o| o.is_stored()).count();
        info!(
            backend = self.backend.name(),
            total = count,
            stored,
            rejected = count - stored,
            "processed upload batch"
        );

        Ok(outcomes)
    }

    async fn store_one(&self, file: IncomingFile) -> UploadOutcome {
        let size = file.data.len() as u64;
        if size > self.max_file_size {
            warn!(
                original_name = %file.original_name,
                size,
                max = self.max_file_size,
                "rejected oversized file"
            );
            return UploadOutcome::Rejected {
                original_name: file.original_name,
                error: UploadError::payload_too_large(size, self.max_file_size),
            };
        }

        let is_image = FileCategory::from_name(&file.original_name).is_image();

        let descriptor = match self.backend.persist(&file.original_name, file.data).await {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!(original_name = %file.original_name, error = %e, "failed to store file");
                return UploadOutcome::Rejected {
                    original_name: file.original_name,
                    error: e.into(),
                };
            }
        };

        let url = match self.backend.url_for(&descriptor.key, UrlIntent::Preview).await {
            Ok(url) => url,
            Err(e) => {
                warn!(key = %descriptor.key, error = %e, "failed to build preview url");
                return UploadOutcome::Rejected {
                    original_name: descriptor.original_name,
                    error: e.into(),
                };
            }
        };

        UploadOutcome::Stored(UploadResult {
            original_name: descriptor.original_name,
            key: descriptor.key,
            url,
            is_image,
            content_type: descriptor.content_type,
        })
    }
}
