//! URL Utility Functions
//!
//! Address classification and normalization. Both are pure string checks on
//! an already-parsed `Url`; nothing here touches the network.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::Options;

/// Parse a string into an absolute http(s) URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let url = Url::parse(url_str.trim()).ok()?;
    if is_web_scheme(&url) && url.host_str().is_some() {
        Some(url)
    } else {
        None
    }
}

fn is_web_scheme(url: &Url) -> bool {
    // `Url` lowercases the scheme while parsing
    matches!(url.scheme(), "http" | "https")
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.is_char_boundary(s.len() - suffix.len())
        && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Check whether `url` identifies a gallery document this crate can extract.
///
/// All of the following must hold:
/// - scheme is `http` or `https`
/// - host equals `opts.site_host` (internationalized hosts are compared in
///   their ASCII form, which is how `Url` stores them)
/// - path ends with `opts.document_suffix`
/// - path starts with one of `opts.route_prefixes()`
///
/// Comparisons are case-insensitive and run on the percent-decoded path, so
/// `/galleries/1%2Ehtml` is accepted.
#[must_use]
pub fn can_handle(url: &Url, opts: &Options) -> bool {
    if !is_web_scheme(url) {
        return false;
    }

    let host_matches = url
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case(&opts.site_host));

    let path = decoded_path(url);

    host_matches
        && ends_with_ignore_case(&path, &opts.document_suffix)
        && opts
            .route_prefixes()
            .iter()
            .any(|prefix| starts_with_ignore_case(&path, prefix))
}

fn decoded_path(url: &Url) -> Cow<'_, str> {
    percent_decode_str(url.path()).decode_utf8_lossy()
}

/// Rewrite a reader address to the gallery address of the same resource.
///
/// Only a leading `opts.reader_prefix` (matched after percent-decoding, with
/// exact case) is replaced by `opts.gallery_prefix`; the rest of the path,
/// query and fragment are kept verbatim. Normalizing a gallery address is a
/// no-op.
#[must_use]
pub fn normalize(url: &Url, opts: &Options) -> Url {
    let mut normalized = url.clone();
    if let Some(rest) = strip_decoded_prefix(url.path(), &opts.reader_prefix) {
        normalized.set_path(&format!("{}{rest}", opts.gallery_prefix));
    }
    normalized
}

/// Remainder of the raw `path` after the shortest head that decodes to
/// `prefix`.
fn strip_decoded_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if let Some(rest) = path.strip_prefix(prefix) {
        return Some(rest);
    }
    // an escape is three bytes for one decoded byte
    let longest = prefix.len().saturating_mul(3).min(path.len());
    (prefix.len()..=longest)
        .filter(|&end| path.is_char_boundary(end))
        .find(|&end| percent_decode_str(&path[..end]).decode_utf8_lossy() == prefix)
        .map(|end| &path[end..])
}
