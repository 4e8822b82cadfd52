//! Typed view-models for the HTML pages.
//!
//! All human-facing formatting (sizes, timestamps) happens here so the core
//! services stay presentation-free.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use filedrop_core::listing::ListingEntry;
use filedrop_core::upload::{UploadOutcome, UploadResult};

/// Upload form page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

/// File listing page.
#[derive(Template)]
#[template(path = "files.html")]
pub struct FilesPage {
    /// One card per stored file.
    pub files: Vec<FileCard>,
    /// Active backend name, shown in the page footer.
    pub backend: &'static str,
}

/// One file card on the listing page.
pub struct FileCard {
    /// Storage key (delete requests need it).
    pub key: String,
    /// Display name.
    pub display_name: String,
    /// Category icon glyph.
    pub icon: &'static str,
    /// Whether to render an inline thumbnail.
    pub is_image: bool,
    /// Human-readable size.
    pub size: String,
    /// Human-readable modification time.
    pub modified: String,
    /// Inline URL.
    pub preview_url: String,
    /// Forced-download URL.
    pub download_url: String,
}

impl FilesPage {
    /// Build the page from listing entries.
    #[must_use]
    pub fn from_entries(entries: &[ListingEntry], backend: &'static str) -> Self {
        let files = entries
            .iter()
            .map(|entry| FileCard {
                key: entry.key.clone(),
                display_name: entry.display_name.clone(),
                icon: entry.icon(),
                is_image: entry.is_image(),
                size: human_size(entry.size_bytes),
                modified: entry
                    .last_modified
                    .map_or_else(|| "—".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
                preview_url: entry.preview_url.clone(),
                download_url: entry.download_url.clone(),
            })
            .collect();

        Self { files, backend }
    }
}

/// Result page rendered after an upload batch.
#[derive(Template)]
#[template(path = "upload_results.html")]
pub struct UploadResultsPage {
    /// One row per uploaded file, in the caller's order.
    pub results: Vec<UploadRow>,
}

/// One row on the upload result page.
pub struct UploadRow {
    /// The filename exactly as uploaded.
    pub original_name: String,
    /// Whether the file was stored.
    pub stored: bool,
    /// Preview URL (empty when rejected).
    pub url: String,
    /// Whether the stored file renders inline as an image.
    pub is_image: bool,
    /// Failure reason (empty when stored).
    pub detail: String,
}

impl UploadResultsPage {
    /// Build the page from per-file outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[UploadOutcome]) -> Self {
        let results = outcomes
            .iter()
            .map(|outcome| match outcome {
                UploadOutcome::Stored(UploadResult {
                    original_name,
                    url,
                    is_image,
                    ..
                }) => UploadRow {
                    original_name: original_name.clone(),
                    stored: true,
                    url: url.clone(),
                    is_image: *is_image,
                    detail: String::new(),
                },
                UploadOutcome::Rejected {
                    original_name,
                    error,
                } => UploadRow {
                    original_name: original_name.clone(),
                    stored: false,
                    url: String::new(),
                    is_image: false,
                    detail: error.to_string(),
                },
            })
            .collect();

        Self { results }
    }
}

/// HTML error page for the listing endpoint.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    /// What went wrong.
    pub message: String,
}

/// Render a template into an HTML response with the given status.
pub fn render_html<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Human-readable byte size, one decimal for non-byte units.
#[must_use]
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}
