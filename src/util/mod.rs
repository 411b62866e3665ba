//
//  ashby-sdk
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the transport and resource layers.
//!
//! - **Downloads**: [`filename_from_content_disposition`], [`format_size`]
//! - **Messages**: [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use ashby_sdk::util::{filename_from_content_disposition, format_size, truncate};
//!
//! assert_eq!(
//!     filename_from_content_disposition("attachment; filename=\"resume.pdf\""),
//!     Some("resume.pdf".to_string())
//! );
//! assert_eq!(format_size(1536), "1.5 KB");
//! assert_eq!(truncate("hello world", 8), "hello...");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Filename used when a download carries no usable `Content-Disposition`.
pub const DEFAULT_DOWNLOAD_NAME: &str = "downloaded_file";

static FILENAME_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)filename\*\s*=\s*(?:[\w-]+'[\w-]*')?"?([^";]+)"?"#).expect("valid regex"));
static FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)filename\s*=\s*(?:"([^"]*)"|([^;]+))"#).expect("valid regex"));

/// Extracts the suggested filename from a `Content-Disposition` header value.
///
/// The extended `filename*=` form wins over plain `filename=`; percent
/// escapes in it are decoded. Quotes and surrounding whitespace are removed.
///
/// # Returns
///
/// `None` when the header names no filename or the name is empty.
///
/// # Example
///
/// ```rust
/// use ashby_sdk::util::filename_from_content_disposition;
///
/// assert_eq!(
///     filename_from_content_disposition("attachment; filename*=UTF-8''CV%20Jane.pdf"),
///     Some("CV Jane.pdf".to_string())
/// );
/// assert_eq!(filename_from_content_disposition("inline"), None);
/// ```
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    if let Some(encoded) = FILENAME_STAR
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
    {
        let decoded = url::form_urlencoded::parse(format!("n={}", encoded.replace('+', "%2B")).as_bytes())
            .next()
            .map(|(_, value)| value.into_owned())
            .unwrap_or_else(|| encoded.to_string());
        if !decoded.is_empty() {
            return Some(decoded);
        }
    }

    FILENAME
        .captures(header)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim().trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

/// Truncates a string to at most `max_chars` characters, adding an ellipsis if needed.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
///
/// ```rust
/// use ashby_sdk::util::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// assert_eq!(truncate("short", 3), "sho");
/// ```
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 3 {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Formats a byte count using binary units.
///
/// ```rust
/// use ashby_sdk::util::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1048576), "1.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_forms() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"resume.pdf\""),
            Some("resume.pdf".to_string())
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=cover.docx; size=10"),
            Some("cover.docx".to_string())
        );
        assert_eq!(
            filename_from_content_disposition(
                "attachment; filename=\"fallback.pdf\"; filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"
            ),
            Some("résumé.pdf".to_string())
        );
    }

    #[test]
    fn test_filename_missing() {
        assert_eq!(filename_from_content_disposition(""), None);
        assert_eq!(filename_from_content_disposition("attachment"), None);
        assert_eq!(filename_from_content_disposition("attachment; filename=\"\""), None);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1610612736), "1.5 GB");
    }
}
