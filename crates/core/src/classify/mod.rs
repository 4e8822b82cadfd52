//! Extension-based content-type and category tables.
//!
//! A single static mapping drives both upload classification and the
//! listing page icons, so the two can never drift apart. Extensions are
//! matched case-insensitively; anything unknown falls back to
//! `application/octet-stream` and the generic category.

use serde::Serialize;

/// Fallback MIME type for unknown extensions.
pub const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

/// Lowercased extension of `name`, if it has one.
fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// MIME type for a filename, derived from its extension.
#[must_use]
pub fn content_type_for(name: &str) -> &'static str {
    let Some(ext) = extension(name) else {
        return GENERIC_CONTENT_TYPE;
    };

    match ext.as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "rtf" => "application/rtf",
        // Spreadsheets
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "csv" => "text/csv",
        // Archives
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "rar" => "application/vnd.rar",
        "7z" => "application/x-7z-compressed",
        // Code and markup
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "toml" => "text/plain",
        "yaml" | "yml" => "text/plain",
        "rs" | "py" | "ts" | "sh" => "text/plain",
        _ => GENERIC_CONTENT_TYPE,
    }
}

/// Display category for a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    /// Raster or vector image.
    Image,
    /// Video container.
    Video,
    /// Audio file.
    Audio,
    /// Text document.
    Document,
    /// Tabular data.
    Spreadsheet,
    /// Compressed archive.
    Archive,
    /// Source code or markup.
    Code,
    /// Everything else.
    #[default]
    Generic,
}

impl FileCategory {
    /// Classify a filename by its extension.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let Some(ext) = extension(name) else {
            return Self::Generic;
        };

        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" | "ico" => Self::Image,
            "mp4" | "webm" | "mov" | "avi" | "mkv" => Self::Video,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" => Self::Audio,
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" => Self::Document,
            "xls" | "xlsx" | "csv" => Self::Spreadsheet,
            "zip" | "tar" | "gz" | "rar" | "7z" => Self::Archive,
            "html" | "htm" | "css" | "js" | "json" | "xml" | "toml" | "yaml" | "yml" | "rs"
            | "py" | "ts" | "sh" => Self::Code,
            _ => Self::Generic,
        }
    }

    /// Stable string value for API responses.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Spreadsheet => "spreadsheet",
            Self::Archive => "archive",
            Self::Code => "code",
            Self::Generic => "generic",
        }
    }

    /// Icon glyph shown on the listing page.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Image => "🖼️",
            Self::Video => "🎬",
            Self::Audio => "🎵",
            Self::Document => "📄",
            Self::Spreadsheet => "📊",
            Self::Archive => "🗜️",
            Self::Code => "💻",
            Self::Generic => "📦",
        }
    }

    /// Whether files of this category render as inline images.
    #[must_use]
    pub fn is_image(self) -> bool {
        self == Self::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("photo.PNG", FileCategory::Image)]
    #[case("photo.jpeg", FileCategory::Image)]
    #[case("clip.mp4", FileCategory::Video)]
    #[case("song.FLAC", FileCategory::Audio)]
    #[case("report.pdf", FileCategory::Document)]
    #[case("ledger.xlsx", FileCategory::Spreadsheet)]
    #[case("archive.zip", FileCategory::Archive)]
    #[case("main.rs", FileCategory::Code)]
    #[case("unknown.xyz", FileCategory::Generic)]
    #[case("no-extension", FileCategory::Generic)]
    #[case(".gitignore", FileCategory::Generic)]
    fn test_category_from_name(#[case] name: &str, #[case] expected: FileCategory) {
        assert_eq!(FileCategory::from_name(name), expected);
    }

    #[rstest]
    #[case("photo.PNG", "image/png")]
    #[case("report.pdf", "application/pdf")]
    #[case("data.csv", "text/csv")]
    #[case("archive.tar.gz", "application/gzip")]
    #[case("unknown.xyz", GENERIC_CONTENT_TYPE)]
    #[case("no-extension", GENERIC_CONTENT_TYPE)]
    fn test_content_type_for(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(content_type_for(name), expected);
    }

    #[test]
    fn test_is_image_only_for_images() {
        assert!(FileCategory::Image.is_image());
        for category in [
            FileCategory::Video,
            FileCategory::Audio,
            FileCategory::Document,
            FileCategory::Spreadsheet,
            FileCategory::Archive,
            FileCategory::Code,
            FileCategory::Generic,
        ] {
            assert!(!category.is_image());
        }
    }

    #[test]
    fn test_every_category_has_an_icon() {
        let categories = [
            FileCategory::Image,
            FileCategory::Video,
            FileCategory::Audio,
            FileCategory::Document,
            FileCategory::Spreadsheet,
            FileCategory::Archive,
            FileCategory::Code,
            FileCategory::Generic,
        ];
        for category in categories {
            assert!(!category.icon().is_empty());
            assert!(!category.as_str().is_empty());
        }
    }
}
