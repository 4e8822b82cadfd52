//! Listing service implementation.

use std::sync::Arc;

use tracing::debug;

use super::types::ListingEntry;
use crate::classify::FileCategory;
use crate::storage::{StorageBackend, StorageError, UrlIntent, key};

/// Builds the file listing from the active storage backend.
pub struct ListingService {
    backend: Arc<dyn StorageBackend>,
}

impl ListingService {
    /// Create a new listing service.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// All stored files as display-ready entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend listing or URL generation fails.
    pub async fn list_files(&self) -> Result<Vec<ListingEntry>, StorageError> {
        let mut descriptors = self.backend.list().await?;
        descriptors.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

        let mut entries = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let display_name = key::display_name(&descriptor.key).to_string();
            let category = FileCategory::from_name(&display_name);
            let preview_url = self
                .backend
                .url_for(&descriptor.key, UrlIntent::Preview)
                .await?;
            let download_url = self
                .backend
                .url_for(&descriptor.key, UrlIntent::Download)
                .await?;

            entries.push(ListingEntry {
                key: descriptor.key,
                display_name,
                category,
                size_bytes: descriptor.size_bytes,
                last_modified: descriptor.last_modified,
                content_type: descriptor.content_type,
                preview_url,
                download_url,
            });
        }

        debug!(backend = self.backend.name(), count = entries.len(), "built file listing");

        Ok(entries)
    }
}
