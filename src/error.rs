//! Error types for hitomi-metadata.
//!
//! Every failure aborts the whole extraction; there is no partial record.

/// Boxed error produced by a [`DocumentFetcher`](crate::DocumentFetcher).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The address is not a gallery or reader page of the site, or a page
    /// address could not be built from the scanned script.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The document collaborator could not retrieve or decode the page.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// Address that was requested.
        url: String,
        /// Underlying collaborator error, passed through unchanged.
        #[source]
        source: BoxError,
    },

    /// An element the gallery markup always carries was not found.
    #[error("Missing `{element}` while extracting {field}")]
    StructureMismatch {
        /// Semantic field being extracted.
        field: &'static str,
        /// Selector or positional path of the missing element.
        element: String,
    },

    /// The preview script did not reference a single page.
    #[error("No content pages found in preview script")]
    NoPagesFound,
}

impl Error {
    /// Wrap a collaborator failure for `url`.
    pub fn fetch(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            url: url.into(),
            source: source.into(),
        }
    }

    pub(crate) fn missing(field: &'static str, element: impl Into<String>) -> Self {
        Self::StructureMismatch {
            field,
            element: element.into(),
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
