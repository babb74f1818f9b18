//! # Domain Types
//!
//! Core domain types used throughout Shoecart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductDetails  │   │     Stock       │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  amount         │   │  id             │       │
//! │  │  title          │   │                 │   │  title          │       │
//! │  │  price          │   │  GET /stock/:id │   │  price          │       │
//! │  │  image          │   └─────────────────┘   │  image          │       │
//! │  │                 │                         │  amount         │       │
//! │  │ GET /products/  │ ── snapshot on add ───► │                 │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! `LineItem` serializes to exactly `{ id, title, price, image, amount }`.
//! Do not rename fields: carts already written under [`crate::CART_STORAGE_KEY`]
//! must keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product ID
// =============================================================================

/// Identifier of a product in the stock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw identifier. Use [`crate::validation::validate_product_id`]
    /// for untrusted input.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Available quantity reported by the stock service (`{ "amount": 5 }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub amount: u32,
}

impl Stock {
    #[inline]
    pub const fn new(amount: u32) -> Self {
        Stock { amount }
    }

    /// Nothing left to sell.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// Whether a line may hold `quantity` units.
    #[inline]
    pub const fn covers(&self, quantity: u32) -> bool {
        quantity <= self.amount
    }
}

// =============================================================================
// Product Details
// =============================================================================

/// Product metadata from `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDetails {
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
}

// =============================================================================
// Line Item
// =============================================================================

/// A product plus chosen quantity within the cart.
///
/// Title, price and image are frozen when the product first enters the cart;
/// later catalog changes do not rewrite existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,
    /// Quantity in cart. Always >= 1.
    pub amount: u32,
}

impl LineItem {
    /// Snapshots product details into a new line.
    pub fn from_details(details: &ProductDetails, amount: u32) -> Self {
        LineItem {
            id: details.id,
            title: details.title.clone(),
            price: details.price,
            image: details.image.clone(),
            amount,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_reads_storefront_json() {
        let json = r#"{
            "id": 1,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg",
            "amount": 2
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.price, Money::from_cents(17990));
        assert_eq!(item.amount, 2);
        assert_eq!(item.line_total(), Money::from_cents(35980));
    }

    #[test]
    fn test_line_item_field_names_are_stable() {
        let item = LineItem {
            id: ProductId::new(3),
            title: "Tênis Adidas Duramo Lite 2.0".to_string(),
            price: Money::from_cents(21900),
            image: "tenis3.jpg".to_string(),
            amount: 1,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "title": "Tênis Adidas Duramo Lite 2.0",
                "price": 219.0,
                "image": "tenis3.jpg",
                "amount": 1
            })
        );
    }

    #[test]
    fn test_stock_covers() {
        let stock = Stock::new(3);
        assert!(stock.covers(3));
        assert!(!stock.covers(4));
        assert!(!stock.is_empty());
        assert!(Stock::new(0).is_empty());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        assert!(serde_json::from_str::<Stock>(r#"{ "amount": -1 }"#).is_err());
    }
}
