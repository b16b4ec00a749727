//! Thumbnail tokens scanned from the gallery preview script.
//!
//! The preview script lists every thumbnail of the gallery, one quoted
//! entry per line:
//!
//! ```text
//! '//tn.hitomi.la/smalltn/1083230/1.jpg.jpg',
//! ```
//!
//! Thumbnail names carry their extension twice. Dropping the appended copy
//! gives the name of the full-size page, which lives under the same gallery id.

use tracing::trace;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::THUMBNAIL_LINE;
use crate::Options;

/// Length in characters of the duplicated extension (`.jpg`, `.png`, ...).
pub const DUPLICATED_EXTENSION_LEN: usize = 4;

/// Remove the duplicated extension from a thumbnail file name.
///
/// Drops exactly the last [`DUPLICATED_EXTENSION_LEN`] characters. Returns
/// `None` when nothing would remain.
///
/// ```
/// use hitomi_metadata::extractor::thumbnails::strip_duplicated_extension;
///
/// assert_eq!(strip_duplicated_extension("1.jpg.jpg"), Some("1.jpg"));
/// assert_eq!(strip_duplicated_extension(".jpg"), None);
/// ```
#[must_use]
pub fn strip_duplicated_extension(raw: &str) -> Option<&str> {
    let (cut, _) = raw.char_indices().rev().nth(DUPLICATED_EXTENSION_LEN - 1)?;
    if cut == 0 {
        return None;
    }
    Some(&raw[..cut])
}

/// One page reference recovered from the preview script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailToken {
    gallery_id: String,
    file_name: String,
}

impl ThumbnailToken {
    /// Build a token from a gallery id and a raw thumbnail name.
    ///
    /// Returns `None` when the raw name is too short to hold a duplicated
    /// extension.
    #[must_use]
    pub fn new(gallery_id: &str, raw_file_name: &str) -> Option<Self> {
        let file_name = strip_duplicated_extension(raw_file_name)?;
        Some(Self {
            gallery_id: gallery_id.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Gallery id the page belongs to.
    #[must_use]
    pub fn gallery_id(&self) -> &str {
        &self.gallery_id
    }

    /// File name of the full-size page.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Address of the full-size page:
    /// `{image_scheme}://{image_host}{image_path_prefix}{gallery_id}/{file_name}`.
    ///
    /// Gallery id and file name are appended as escaped path segments, so a
    /// `#` or `?` in a name stays part of the path.
    pub fn page_url(&self, opts: &Options) -> Result<Url> {
        let origin = format!("{}://{}/", opts.image_scheme, opts.image_host);
        let mut url =
            Url::parse(&origin).map_err(|e| Error::InvalidAddress(format!("{origin}: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| Error::InvalidAddress(format!("{origin}: not a hierarchical address")))?
            .clear()
            .extend(opts.image_path_prefix.split('/').filter(|s| !s.is_empty()))
            .extend([self.gallery_id.as_str(), self.file_name.as_str()]);
        Ok(url)
    }
}

/// Scan script source for thumbnail entries, in line order.
#[must_use]
pub fn scan(script: &str) -> Vec<ThumbnailToken> {
    THUMBNAIL_LINE
        .captures_iter(script)
        .filter_map(|caps| {
            let token = ThumbnailToken::new(caps.get(1)?.as_str(), caps.get(2)?.as_str());
            trace!(?token, "thumbnail entry");
            token
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_duplicated_extension() {
        assert_eq!(strip_duplicated_extension("1.jpg.jpg"), Some("1.jpg"));
        assert_eq!(strip_duplicated_extension("cover.png.png"), Some("cover.png"));
        assert_eq!(strip_duplicated_extension("ab.gif"), Some("ab"));
    }

    #[test]
    fn test_strip_counts_characters_not_bytes() {
        assert_eq!(strip_duplicated_extension("表紙.jpg.jpg"), Some("表紙.jpg"));
        assert_eq!(strip_duplicated_extension("x.jpé"), Some("x"));
    }

    #[test]
    fn test_strip_too_short() {
        assert_eq!(strip_duplicated_extension(""), None);
        assert_eq!(strip_duplicated_extension(".jpg"), None);
        assert_eq!(strip_duplicated_extension("jpg"), None);
    }

    #[test]
    fn test_token_page_url() {
        let token = ThumbnailToken::new("1083230", "1.jpg.jpg").expect("token");
        assert_eq!(token.gallery_id(), "1083230");
        assert_eq!(token.file_name(), "1.jpg");

        let url = token.page_url(&Options::default()).expect("url");
        assert_eq!(url.as_str(), "https://aa.hitomi.la/galleries/1083230/1.jpg");
        assert_eq!(url.path(), "/galleries/1083230/1.jpg");
    }

    #[test]
    fn test_token_page_url_follows_options() {
        let opts = Options {
            image_host: "bb.hitomi.la".to_string(),
            image_path_prefix: "/images/".to_string(),
            ..Options::default()
        };
        let token = ThumbnailToken::new("7", "002.png.png").expect("token");
        let url = token.page_url(&opts).expect("url");
        assert_eq!(url.as_str(), "https://bb.hitomi.la/images/7/002.png");
    }

    #[test]
    fn test_token_page_url_escapes_reserved_characters() {
        let opts = Options::default();

        let hash = ThumbnailToken::new("1", "01 #1.jpg.jpg").expect("token");
        let url = hash.page_url(&opts).expect("url");
        assert_eq!(url.path(), "/galleries/1/01%20%231.jpg");
        assert_eq!(url.fragment(), None);

        let query = ThumbnailToken::new("1", "a?b.jpg.jpg").expect("token");
        let url = query.page_url(&opts).expect("url");
        assert_eq!(url.path(), "/galleries/1/a%3Fb.jpg");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_token_page_url_rejects_bad_host() {
        let opts = Options {
            image_host: String::new(),
            ..Options::default()
        };
        let token = ThumbnailToken::new("1", "1.jpg.jpg").expect("token");
        assert!(matches!(token.page_url(&opts), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_scan_single_line() {
        let tokens = scan("'//tn.hitomi.la/smalltn/1083230/1.jpg.jpg',");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].gallery_id(), "1083230");
        assert_eq!(tokens[0].file_name(), "1.jpg");
    }

    #[test]
    fn test_scan_keeps_line_order() {
        let script = "\
var thumbnails = [
'//tn.hitomi.la/smalltn/55/10.jpg.jpg',
'//tn.hitomi.la/smalltn/55/2.jpg.jpg',
'//tn.hitomi.la/smalltn/55/1.jpg.jpg',
];";
        let tokens = scan(script);
        let names: Vec<&str> = tokens.iter().map(ThumbnailToken::file_name).collect();
        assert_eq!(names, ["10.jpg", "2.jpg", "1.jpg"]);
    }

    #[test]
    fn test_scan_no_entries() {
        assert!(scan("").is_empty());
        assert!(scan("var thumbnails = [];").is_empty());
    }
}
