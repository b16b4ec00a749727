//! Metadata source surface exposed to the hosting system.
//!
//! The host probes sources with [`MetadataSource::can_handle`] and calls
//! [`MetadataSource::extract`] on the one that accepts an address. Fetching is
//! delegated to a [`DocumentFetcher`], the only place a call suspends.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::document::GalleryDocument;
use crate::error::{Error, Result};
use crate::extract::extract_document;
use crate::result::{MetadataRecord, SourceInfo};
use crate::url_utils;
use crate::Options;

/// Identity reported by [`HitomiSource`].
pub const SOURCE_INFO: SourceInfo = SourceInfo {
    name: "Hitomi.la",
    author: "HReader",
    version: env!("CARGO_PKG_VERSION"),
    homepage: "https://github.com/HReader/HReader.Plugin.Hitomila",
};

/// Retrieves and decodes a gallery page.
///
/// Implementations own timeouts and retries; any failure should be reported
/// as [`Error::Fetch`].
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the page at `url`.
    async fn fetch(&self, url: &Url) -> Result<GalleryDocument>;
}

#[async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for Arc<T> {
    async fn fetch(&self, url: &Url) -> Result<GalleryDocument> {
        (**self).fetch(url).await
    }
}

/// A source of catalog metadata.
///
/// Implementations must be safe to call concurrently.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Static description of the source.
    fn identify(&self) -> SourceInfo;

    /// Cheap check whether this source understands `url`. Never does I/O.
    fn can_handle(&self, url: &Url) -> bool;

    /// Resolve `url` to metadata.
    async fn extract(&self, url: &Url) -> Result<MetadataRecord>;
}

/// Metadata source for hitomi.la gallery and reader pages.
#[derive(Debug, Clone)]
pub struct HitomiSource<F> {
    fetcher: F,
    options: Options,
}

impl<F: DocumentFetcher> HitomiSource<F> {
    /// Source for the live site.
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, Options::default())
    }

    /// Source with custom site options.
    pub fn with_options(fetcher: F, options: Options) -> Self {
        Self { fetcher, options }
    }

    /// Site options in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetcher in use.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[async_trait]
impl<F: DocumentFetcher> MetadataSource for HitomiSource<F> {
    fn identify(&self) -> SourceInfo {
        SOURCE_INFO
    }

    fn can_handle(&self, url: &Url) -> bool {
        url_utils::can_handle(url, &self.options)
    }

    async fn extract(&self, url: &Url) -> Result<MetadataRecord> {
        if !self.can_handle(url) {
            return Err(Error::InvalidAddress(url.to_string()));
        }

        let gallery_url = url_utils::normalize(url, &self.options);
        debug!(%url, %gallery_url, "normalized gallery address");

        let document = self
            .fetcher
            .fetch(&gallery_url)
            .await
            .inspect_err(|err| warn!(%gallery_url, error = %err, "gallery fetch failed"))?;

        extract_document(&document, &self.options)
    }
}
