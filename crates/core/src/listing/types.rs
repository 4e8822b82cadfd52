//! Listing types.

use chrono::{DateTime, Utc};

use crate::classify::FileCategory;

/// One stored file, prepared for display.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    /// Storage key (used for delete requests).
    pub key: String,
    /// Filename shown to the user (key without the timestamp prefix).
    pub display_name: String,
    /// Display category.
    pub category: FileCategory,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modification time, when the backend reports one.
    pub last_modified: Option<DateTime<Utc>>,
    /// Derived MIME type.
    pub content_type: String,
    /// URL that renders the file inline.
    pub preview_url: String,
    /// URL that forces an attachment download.
    pub download_url: String,
}

impl ListingEntry {
    /// Icon glyph for this entry's category.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }

    /// Whether this entry renders as an inline image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.category.is_image()
    }
}
