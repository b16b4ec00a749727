//! Compiled regex patterns for gallery extraction.
//!
//! All patterns are compiled once on first use with `LazyLock` and are
//! read-only afterwards, so they are safe to share between concurrent calls.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches one thumbnail entry of the preview script array, e.g.
///
/// ```text
/// '//tn.hitomi.la/smalltn/1083230/1.jpg.jpg',
/// ```
///
/// Groups:
/// - `1`: gallery id, the segment before the last one
/// - `2`: raw file name, the last segment including the duplicated extension
///
/// One match per line; indentation and a trailing `\r` are tolerated.
pub static THUMBNAIL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*'[^'\n]*/([^/'\n]+)/([^/'\n]+)',[ \t]*\r?$")
        .expect("THUMBNAIL_LINE regex")
});
