//! # Cart Commands
//!
//! Entry points the UI calls. Raw ids arrive as plain integers and are
//! validated here before they reach the store.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  remove_from_cart            │
//! │  │  Empty   │───────────────►│ In Cart  │─────────────────► (empty)     │
//! │  │  Cart    │                │          │                               │
//! │  └──────────┘                └──────────┘                               │
//! │                                  │  ▲                                   │
//! │                  update_cart_item│  │add_to_cart (same id)              │
//! │                                  ▼  │                                   │
//! │                              quantity n ≤ stock                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use shoecart_core::validation::validate_product_id;
use shoecart_core::{CartTotals, LineItem, ProductId};

use crate::error::{CartError, CartOp};
use crate::state::CartStore;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        store.with_cart(|cart| CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(),
        })
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(store)
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Product already in cart: quantity increases, bounded by stock
/// - Product not in cart: fetched from the catalog and added with quantity 1
pub async fn add_to_cart(store: &CartStore, product_id: i64) -> CartResponse {
    debug!(product_id, "add_to_cart command");

    if let Some(id) = parse_id(store, CartOp::Add, product_id) {
        store.add_product(id).await;
    }
    CartResponse::from(store)
}

/// Removes a product's line from the cart.
pub async fn remove_from_cart(store: &CartStore, product_id: i64) -> CartResponse {
    debug!(product_id, "remove_from_cart command");

    if let Some(id) = parse_id(store, CartOp::Remove, product_id) {
        store.remove_product(id).await;
    }
    CartResponse::from(store)
}

/// Sets the quantity of a product already in the cart.
///
/// `amount <= 0` leaves the cart untouched.
pub async fn update_cart_item(store: &CartStore, product_id: i64, amount: i64) -> CartResponse {
    debug!(product_id, amount, "update_cart_item command");

    if let Some(id) = parse_id(store, CartOp::Update, product_id) {
        store.update_product_amount(id, amount).await;
    }
    CartResponse::from(store)
}

fn parse_id(store: &CartStore, op: CartOp, raw: i64) -> Option<ProductId> {
    match validate_product_id(raw) {
        Ok(id) => Some(id),
        Err(e) => {
            store.report(op, &CartError::from(e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shoecart_catalog::{CatalogApi, CatalogResult};
    use shoecart_core::{Money, ProductDetails, Stock};
    use shoecart_db::MemoryStorage;
    use std::sync::Arc;

    use crate::state::StoreOptions;
    use crate::toast::{Toast, ToastLog};

    /// Every product exists with stock 2.
    struct TwoOfEverything;

    #[async_trait]
    impl CatalogApi for TwoOfEverything {
        async fn stock(&self, _id: ProductId) -> CatalogResult<Stock> {
            Ok(Stock::new(2))
        }

        async fn product(&self, id: ProductId) -> CatalogResult<ProductDetails> {
            Ok(ProductDetails {
                id,
                title: format!("Tênis {}", id),
                price: Money::from_cents(10000),
                image: format!("tenis{}.jpg", id),
            })
        }
    }

    async fn store() -> (CartStore, ToastLog) {
        let toasts = ToastLog::new();
        let store = CartStore::hydrate(
            Arc::new(TwoOfEverything),
            Arc::new(MemoryStorage::new()),
            Arc::new(toasts.clone()),
            StoreOptions::default(),
        )
        .await;
        (store, toasts)
    }

    #[tokio::test]
    async fn test_commands_return_updated_cart() {
        let (store, toasts) = store().await;

        let response = add_to_cart(&store, 7).await;
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.subtotal, Money::from_cents(10000));

        let response = update_cart_item(&store, 7, 2).await;
        assert_eq!(response.totals.total_quantity, 2);

        let response = remove_from_cart(&store, 7).await;
        assert!(response.items.is_empty());
        assert_eq!(response, get_cart(&store));

        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_id_is_toasted() {
        let (store, toasts) = store().await;

        let response = add_to_cart(&store, 0).await;

        assert!(response.items.is_empty());
        assert_eq!(
            toasts.snapshot(),
            vec![Toast::error("Erro na adição do produto")]
        );
    }

    #[test]
    fn test_response_serialization() {
        let response = CartResponse {
            items: vec![],
            totals: CartTotals::default(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totals"]["itemCount"], 0);
        assert_eq!(json["totals"]["totalQuantity"], 0);
    }
}
