//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken from, in order, a
//! byte-order mark, the HTTP `Content-Type` header, and the page's own meta
//! declarations, falling back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match a `charset=` parameter of a Content-Type value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

fn label_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Charset named by a `Content-Type` header value such as
/// `text/html; charset=Shift_JIS`.
#[must_use]
pub fn content_type_encoding(content_type: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| label_encoding(m.as_str()))
}

/// Charset declared by the page itself.
///
/// Covers both `<meta charset>` and `<meta http-equiv="Content-Type">`.
/// Only the first 1024 bytes are examined.
#[must_use]
pub fn meta_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| label_encoding(m.as_str()))
}

/// Pick the encoding of a fetched page.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    content_type
        .and_then(content_type_encoding)
        .or_else(|| meta_encoding(html))
        .unwrap_or(UTF_8)
}

/// Transcode page bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use hitomi_metadata::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><h1>Caf\xE9</h1></html>";
/// assert!(transcode_to_utf8(html, None).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);

    // decode() strips a matching BOM and replaces malformed sequences
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_16LE, WINDOWS_1252};

    #[test]
    fn default_to_utf8_when_nothing_declared() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>", None), UTF_8);
    }

    #[test]
    fn header_charset_wins_over_meta() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        let encoding = detect_encoding(html, Some("text/html; charset=Shift_JIS"));
        assert_eq!(encoding, SHIFT_JIS);
    }

    #[test]
    fn bom_wins_over_header() {
        let html = b"\xFF\xFE<\x00h\x001\x00>\x00";
        assert_eq!(detect_encoding(html, Some("text/html; charset=utf-8")), UTF_16LE);
    }

    #[test]
    fn header_without_charset_falls_back_to_meta() {
        let html = br#"<meta charset="ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html, Some("text/html")), WINDOWS_1252);
    }

    #[test]
    fn meta_http_equiv_is_detected() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=Shift_JIS">"#;
        assert_eq!(meta_encoding(html), Some(SHIFT_JIS));
    }

    #[test]
    fn content_type_charset_variants() {
        assert_eq!(content_type_encoding("text/html; charset=\"utf-8\""), Some(UTF_8));
        assert_eq!(content_type_encoding("text/html;charset=UTF-8"), Some(UTF_8));
        assert_eq!(content_type_encoding("text/html"), None);
        assert_eq!(content_type_encoding("text/html; charset=bogus"), None);
    }

    #[test]
    fn transcode_shift_jis_title() {
        // "表紙" in Shift_JIS
        let html = b"<h1>\x95\x5C\x8E\x86</h1>";
        let text = transcode_to_utf8(html, Some("text/html; charset=Shift_JIS"));
        assert_eq!(text, "<h1>表紙</h1>");
    }

    #[test]
    fn transcode_invalid_utf8_gracefully() {
        let text = transcode_to_utf8(b"<h1>Test \xFF\xFE Invalid</h1>", None);
        assert!(text.contains("Test"));
        assert!(text.contains("Invalid"));
    }
}
