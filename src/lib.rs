//! # hitomi-metadata
//!
//! Catalog metadata extraction for hitomi.la gallery pages.
//!
//! A gallery page yields a title, artists, classification, language,
//! series/character/tag associations and the ordered list of full-size page
//! addresses. Structured fields are read from the fixed gallery markup; the
//! page list is recovered from the preview script, which lists every
//! thumbnail even though the markup only renders the first few.
//!
//! ## Quick Start
//!
//! ```rust
//! use hitomi_metadata::extract_html;
//!
//! let html = r#"<html><body>
//! <div class="gallery">
//!   <h1>My Gallery</h1>
//!   <h2><ul><li>artist</li></ul></h2>
//!   <table>
//!     <tr><td>Group</td><td>N/A</td></tr>
//!     <tr><td>Type</td><td><a>manga</a></td></tr>
//!     <tr><td>Language</td><td><a>english</a></td></tr>
//!     <tr><td>Tags</td><td><ul><li>full color</li></ul></td></tr>
//!   </table>
//! </div>
//! <div class="gallery-preview"><script>
//! '//tn.hitomi.la/smalltn/1083230/1.jpg.jpg',
//! '//tn.hitomi.la/smalltn/1083230/2.jpg.jpg',
//! </script></div>
//! </body></html>"#;
//!
//! let record = extract_html(html)?;
//! assert_eq!(record.title(), "My Gallery");
//! assert_eq!(record.pages().len(), 2);
//! assert_eq!(record.cover().as_str(), "https://aa.hitomi.la/galleries/1083230/1.jpg");
//! # Ok::<(), hitomi_metadata::Error>(())
//! ```
//!
//! ## Fetching
//!
//! [`HitomiSource`] implements [`MetadataSource`] on top of any
//! [`DocumentFetcher`]. With the `http` feature, [`fetch::HttpFetcher`]
//! provides one over `reqwest`.
//!
//! All functions are free of shared mutable state and may be called
//! concurrently.

mod document;
mod error;
mod extract;
mod options;
mod patterns;
mod result;
mod source;

/// DOM query adapter over `dom_query`.
pub mod dom;

/// Structural paths of the gallery metadata fields.
pub mod selector;

/// Structured field extraction from the gallery markup.
pub mod metadata;

/// Page list extraction from the preview script.
pub mod extractor;

/// Address classification and normalization.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP fetcher over `reqwest`.
#[cfg(feature = "http")]
pub mod fetch;

// Public API - re-exports
pub use document::GalleryDocument;
pub use error::{BoxError, Error, Result};
pub use extract::{assemble, extract_document, extract_tree};
pub use options::Options;
pub use result::{GalleryFields, MetadataRecord, SourceInfo};
pub use source::{DocumentFetcher, HitomiSource, MetadataSource, SOURCE_INFO};
pub use url::Url;

/// Checks whether `address` is a hitomi.la gallery or reader page.
///
/// Unparseable addresses are simply not handled.
///
/// # Example
///
/// ```rust
/// use hitomi_metadata::can_handle;
///
/// assert!(can_handle("https://hitomi.la/reader/1083230.html"));
/// assert!(!can_handle("https://hitomi.la/tag/glasses-all.html"));
/// assert!(!can_handle("not a url"));
/// ```
#[must_use]
pub fn can_handle(address: &str) -> bool {
    url_utils::parse_url(address)
        .is_some_and(|url| url_utils::can_handle(&url, &Options::default()))
}

/// Rewrites a reader address to its gallery address using default options.
///
/// # Example
///
/// ```rust
/// use hitomi_metadata::{normalize, Url};
///
/// let url = Url::parse("https://hitomi.la/reader/12345.html#2")?;
/// assert_eq!(normalize(&url).as_str(), "https://hitomi.la/galleries/12345.html#2");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn normalize(url: &Url) -> Url {
    url_utils::normalize(url, &Options::default())
}

/// Extracts a record from gallery page markup using default options.
///
/// No network access; the markup is assumed to be a gallery page.
pub fn extract_html(html: &str) -> Result<MetadataRecord> {
    extract_html_with_options(html, &Options::default())
}

/// Extracts a record from gallery page markup with custom options.
pub fn extract_html_with_options(html: &str, options: &Options) -> Result<MetadataRecord> {
    extract_tree(&dom::parse(html), options)
}
