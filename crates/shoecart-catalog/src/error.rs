//! Catalog errors.

use thiserror::Error;

/// Errors that can occur when calling the stock service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured base URL can't be used.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built.
    #[error("Catalog client setup failed: {0}")]
    Client(String),

    /// HTTP request failed before a response arrived.
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// No response within the configured timeout.
    #[error("Catalog request timed out")]
    Timeout,

    /// The service has no such resource (HTTP 404).
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: u32 },

    /// Any other non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Failed to parse the response body.
    #[error("Catalog response error: {0}")]
    Response(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else if err.is_decode() {
            CatalogError::Response(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::NotFound {
            resource: "stock",
            id: 12,
        };
        assert_eq!(err.to_string(), "stock 12 not found");
    }
}
