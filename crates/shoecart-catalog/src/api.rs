//! The seam between the cart store and the stock service.

use async_trait::async_trait;
use shoecart_core::{ProductDetails, ProductId, Stock};

use crate::error::CatalogResult;

/// Read-only access to stock levels and product metadata.
///
/// Implemented by [`crate::CatalogClient`] over HTTP; tests supply their own.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Current stock level of a product.
    async fn stock(&self, id: ProductId) -> CatalogResult<Stock>;

    /// Title, price and image of a product.
    async fn product(&self, id: ProductId) -> CatalogResult<ProductDetails>;
}
