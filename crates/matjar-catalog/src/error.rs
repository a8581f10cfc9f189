use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// The product list could not be fetched or parsed.
///
/// Cloneable so that every caller sharing one in-flight fetch receives the
/// same failure.
#[derive(Debug, Clone, Error)]
#[error("catalog unavailable: {0}")]
pub struct CatalogUnavailable(#[source] Arc<CatalogError>);

impl CatalogUnavailable {
    /// The underlying fetch or parse failure.
    #[must_use]
    pub fn cause(&self) -> &CatalogError {
        &self.0
    }
}

impl From<CatalogError> for CatalogUnavailable {
    fn from(err: CatalogError) -> Self {
        Self(Arc::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The detail page was opened without a usable `name` parameter.
    #[error("invalid product link: {reason}")]
    InvalidSlugInput { reason: String },
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error while writing feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("feed output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
