//! Fetched gallery pages.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::encoding;

/// A gallery page as handed over by a [`DocumentFetcher`](crate::DocumentFetcher).
///
/// Holds the decoded markup rather than a parsed tree so it can cross await
/// points on multi-threaded executors; [`tree`](Self::tree) parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryDocument {
    url: Url,
    html: String,
}

impl GalleryDocument {
    /// Wrap already decoded markup.
    #[must_use]
    pub fn new(url: Url, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }

    /// Decode raw response bytes, honouring the response `Content-Type`.
    #[must_use]
    pub fn from_bytes(url: Url, bytes: &[u8], content_type: Option<&str>) -> Self {
        Self::new(url, encoding::transcode_to_utf8(bytes, content_type))
    }

    /// Address the page was fetched from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Decoded markup.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Parse the markup into a navigable tree.
    #[must_use]
    pub fn tree(&self) -> Document {
        dom::parse(&self.html)
    }
}
