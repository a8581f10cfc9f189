//! HTTP client for the storefront's JSON product feed.

use std::time::Duration;

use matjar_core::Product;
use reqwest::Client;

use crate::error::CatalogError;

/// HTTP client for the storefront's product feed.
///
/// Maps 404 and other non-2xx responses to typed errors. There is no retry
/// loop: a failed fetch is reported once and the caller decides whether to
/// ask again.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches and parses the complete product list from `catalog_url`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`]: `catalog_url` is not an absolute http(s) URL.
    /// - [`CatalogError::NotFound`]: HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network or TLS failure.
    /// - [`CatalogError::Deserialize`]: body is not a JSON array of product objects.
    pub async fn fetch_catalog(&self, catalog_url: &str) -> Result<Vec<Product>, CatalogError> {
        let url = Self::catalog_url(catalog_url)?;

        tracing::debug!(url = %url, "fetching product catalog");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json,*/*;q=0.8")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let products =
            serde_json::from_str::<Vec<Product>>(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("product catalog from {url}"),
                source: e,
            })?;

        tracing::info!(url = %url, count = products.len(), "fetched product catalog");

        Ok(products)
    }

    /// Parses and validates the configured feed URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if the URL does not parse or uses
    /// a scheme other than `http`/`https`.
    fn catalog_url(catalog_url: &str) -> Result<reqwest::Url, CatalogError> {
        let url = reqwest::Url::parse(catalog_url).map_err(|e| CatalogError::InvalidUrl {
            url: catalog_url.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl {
                url: catalog_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
