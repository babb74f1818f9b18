//! Wire payloads of the stock service.
//!
//! `GET /stock/{id}` decodes straight into [`shoecart_core::Stock`]; only
//! the product payload needs a shim.

use serde::Deserialize;
use shoecart_core::{Money, ProductDetails, ProductId};

/// Body of `GET /products/{id}`.
///
/// The service echoes `id`; older fixtures omit it, so it is optional and
/// the requested id wins.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub title: String,
    pub price: Money,
    pub image: String,
}

impl ProductResponse {
    pub fn into_details(self, requested: ProductId) -> ProductDetails {
        ProductDetails {
            id: requested,
            title: self.title,
            price: self.price,
            image: self.image,
        }
    }
}
