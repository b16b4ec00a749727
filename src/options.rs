//! Configuration options for gallery extraction.
//!
//! `Options` describes the site: which addresses are accepted, how reader
//! addresses map onto gallery addresses, and where full-size pages live.

/// Site configuration shared by the classifier, normalizer and page extractor.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the live site.
///
/// # Example
///
/// ```rust
/// use hitomi_metadata::Options;
///
/// // Serve pages from a mirror
/// let options = Options {
///     image_host: "bb.hitomi.la".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.site_host, "hitomi.la");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Host serving gallery documents, compared case-insensitively.
    ///
    /// Default: `"hitomi.la"`
    pub site_host: String,

    /// Suffix every gallery document path ends with.
    ///
    /// Default: `".html"`
    pub document_suffix: String,

    /// Route prefix of the canonical gallery family.
    ///
    /// Default: `"/galleries/"`
    pub gallery_prefix: String,

    /// Route prefix of the reader family, rewritten to `gallery_prefix`.
    ///
    /// Default: `"/reader/"`
    pub reader_prefix: String,

    /// Scheme of full-size page addresses.
    ///
    /// Default: `"https"`
    pub image_scheme: String,

    /// Host serving full-size pages.
    ///
    /// Default: `"aa.hitomi.la"`
    pub image_host: String,

    /// Path prefix of full-size pages, followed by `{gallery_id}/{file_name}`.
    ///
    /// Default: `"/galleries/"`
    pub image_path_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            site_host: "hitomi.la".to_string(),
            document_suffix: ".html".to_string(),
            gallery_prefix: "/galleries/".to_string(),
            reader_prefix: "/reader/".to_string(),
            image_scheme: "https".to_string(),
            image_host: "aa.hitomi.la".to_string(),
            image_path_prefix: "/galleries/".to_string(),
        }
    }
}

impl Options {
    /// Route prefixes accepted by the classifier.
    #[must_use]
    pub fn route_prefixes(&self) -> [&str; 2] {
        [self.gallery_prefix.as_str(), self.reader_prefix.as_str()]
    }
}
