//! Storage key generation and parsing.
//!
//! Keys have the form `<millisecond-timestamp>_<sanitized-name>`. The
//! timestamp is strictly monotonic per process, so two files stored in the
//! same millisecond still get distinct keys. The display name is whatever
//! follows the first `_`.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use super::error::StorageError;

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

/// Generate a fresh storage key for `original_name`.
#[must_use]
pub fn generate_key(original_name: &str) -> String {
    format!(
        "{}_{}",
        next_timestamp_millis(),
        sanitize_file_name(original_name)
    )
}

/// Millisecond wall clock, bumped past the last issued value when the clock
/// has not advanced.
fn next_timestamp_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_TIMESTAMP.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_TIMESTAMP.compare_exchange_weak(
            last,
            candidate,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(observed) => last = observed,
        }
    }
}

/// Sanitize a user-supplied filename for use inside a storage key.
///
/// Takes the final path component (uploads arriving as `a/b/c.txt` or
/// `..\evil` keep only the basename), then maps every character outside
/// `[A-Za-z0-9._-]` to `_`. Names that sanitize to nothing but dots become
/// `unnamed`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('.').is_empty() {
        "unnamed".to_string()
    } else {
        sanitized
    }
}

/// Display name for a key: everything after the first `_`.
///
/// Keys are always written with exactly one timestamp prefix, so the split
/// is safe even when the original name itself contains underscores. Keys
/// without any `_` display raw.
#[must_use]
pub fn display_name(key: &str) -> &str {
    key.split_once('_').map_or(key, |(_, rest)| rest)
}

/// Reject keys that could escape the storage root.
///
/// Keys travel back in from HTTP requests, so path separators and
/// traversal segments are refused before any backend call.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::invalid_key("key is empty"));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(StorageError::invalid_key("key contains a path separator"));
    }
    if key == "." || key == ".." {
        return Err(StorageError::invalid_key("key is a traversal segment"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("invoice.pdf", "invoice.pdf")]
    #[case("my file (1).pdf", "my_file__1_.pdf")]
    #[case("test@#$%.doc", "test____.doc")]
    #[case("日本語.pdf", "___.pdf")]
    #[case("dir/nested/report.csv", "report.csv")]
    #[case("..\\..\\evil.exe", "evil.exe")]
    #[case("../../../etc/passwd", "passwd")]
    #[case("..", "unnamed")]
    #[case("", "unnamed")]
    fn test_sanitize_file_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn test_generate_key_format() {
        let key = generate_key("report.pdf");
        let (prefix, rest) = key.split_once('_').expect("key has a separator");
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "report.pdf");
    }

    #[test]
    fn test_generate_key_distinct_for_same_name() {
        let keys: Vec<String> = (0..100).map(|_| generate_key("photo.png")).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[rstest]
    #[case("1700000000000_report.pdf", "report.pdf")]
    #[case("1700000000000_my_notes.txt", "my_notes.txt")]
    #[case("no-separator", "no-separator")]
    fn test_display_name(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(display_name(key), expected);
    }

    #[rstest]
    #[case("1700000000000_report.pdf", true)]
    #[case("", false)]
    #[case("a/b", false)]
    #[case("a\\b", false)]
    #[case(".", false)]
    #[case("..", false)]
    #[case("1700_..secret", true)]
    #[case("1700_archive.tar.gz", true)]
    fn test_validate_key(#[case] key: &str, #[case] ok: bool) {
        assert_eq!(validate_key(key).is_ok(), ok);
    }
}
