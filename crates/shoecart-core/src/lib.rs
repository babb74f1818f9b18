//! # shoecart-core: Pure Cart Logic for Shoecart
//!
//! This crate holds every cart rule as a pure function over plain data.
//! The stock service and local storage live in other crates; here a stock
//! level is just a number handed in by the caller.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoecart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront UI / shoecart CLI                   │   │
//! │  │        Product grid ──► Cart page ──► Quantity controls         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 CartStore (apps/storefront)                     │   │
//! │  │     add_product, remove_product, update_product_amount          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shoecart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Stock    │  │           │  │ CartTotals│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Stock, ProductDetails, LineItem)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart and its mutation rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shoecart_core::{Cart, Money, ProductDetails, ProductId, Stock};
//!
//! let mut cart = Cart::new();
//! let sneaker = ProductDetails {
//!     id: ProductId::new(1),
//!     title: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: Money::from_cents(17990),
//!     image: "https://example.com/sneaker.jpg".to_string(),
//! };
//!
//! cart.add(&sneaker, Stock::new(3)).unwrap();
//! cart.add(&sneaker, Stock::new(3)).unwrap();
//!
//! assert_eq!(cart.totals().total_quantity, 2);
//! assert_eq!(cart.totals().subtotal, Money::from_cents(35980));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Local storage key holding the serialized cart.
///
/// Same key the web storefront writes, so an existing browser cart export
/// loads without conversion.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Quantity given to a product the first time it enters the cart.
pub const INITIAL_QUANTITY: u32 = 1;
