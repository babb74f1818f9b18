//! # Catalog HTTP Client
//!
//! reqwest implementation of [`CatalogApi`].
//!
//! ## Status Mapping
//! ```text
//! 2xx + valid JSON   → Ok(..)
//! 2xx + bad JSON     → CatalogError::Response
//! 404                → CatalogError::NotFound
//! other non-2xx      → CatalogError::Status
//! no answer in time  → CatalogError::Timeout
//! connect/IO error   → CatalogError::Request
//! ```

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use shoecart_core::{ProductDetails, ProductId, Stock};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::api::CatalogApi;
use crate::error::{CatalogError, CatalogResult};
use crate::types::ProductResponse;

/// Default base URL of the development stock service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Configuration
// =============================================================================

/// Where the stock service lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the stock service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Builds a client. Fails if the base URL doesn't parse.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(CatalogClient { http, base_url })
    }

    /// The normalized base URL (always ends in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &'static str,
        id: ProductId,
    ) -> CatalogResult<T> {
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Catalog request failed");
            CatalogError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                resource,
                id: id.get(),
            });
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(CatalogError::from)?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Response(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
        let url = self.endpoint(&format!("stock/{}", id))?;
        let stock: Stock = self.get_json(url, "stock", id).await?;

        debug!(amount = stock.amount, "Fetched stock");
        Ok(stock)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn product(&self, id: ProductId) -> CatalogResult<ProductDetails> {
        let url = self.endpoint(&format!("products/{}", id))?;
        let response: ProductResponse = self.get_json(url, "product", id).await?;

        if let Some(echoed) = response.id {
            if echoed != id {
                warn!(echoed = %echoed, "Product response id differs from request");
            }
        }

        Ok(response.into_details(id))
    }
}

/// Parses `base` and makes sure relative joins append to its path.
fn normalize_base_url(base: &str) -> CatalogResult<Url> {
    let trimmed = base.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
