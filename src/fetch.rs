//! HTTP document fetcher.
//!
//! Plain GET over `reqwest`. There is no retry: a failed request surfaces as
//! [`Error::Fetch`] and the caller decides what to do.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::document::GalleryDocument;
use crate::error::{Error, Result};
use crate::source::DocumentFetcher;

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// `User-Agent` header sent with every request.
    ///
    /// Default: `"hitomi-metadata/<version>"`
    pub user_agent: String,

    /// Whole-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Maximum number of redirects followed.
    ///
    /// Default: `5`
    pub max_redirects: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("hitomi-metadata/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 5,
        }
    }
}

/// [`DocumentFetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with default settings.
    pub fn new() -> Result<Self> {
        Self::with_options(&FetchOptions::default())
    }

    /// Build a fetcher with custom settings.
    pub fn with_options(options: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .redirect(reqwest::redirect::Policy::limited(options.max_redirects))
            .build()
            .map_err(|e| Error::fetch("<client>", e))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<GalleryDocument> {
        debug!(%url, "fetching gallery page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::fetch(url.as_str(), e))?;

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(url.as_str(), e))?;

        debug!(%final_url, bytes = body.len(), "fetched gallery page");
        Ok(GalleryDocument::from_bytes(
            final_url,
            &body,
            content_type.as_deref(),
        ))
    }
}
