//! # shoecart-catalog: Stock Service Client
//!
//! Talks to the storefront's product/stock REST service.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore                                                              │
//! │    add_product ───────────► stock(id), product(id) when new            │
//! │    update_product_amount ─► stock(id)                                  │
//! │    remove_product ────────► (no network)                               │
//! │         │                                                               │
//! │         │  Arc<dyn CatalogApi>                                          │
//! │         ▼                                                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              shoecart-catalog (THIS CRATE)                      │   │
//! │  │   CatalogClient ── reqwest ──► GET {base}/stock/{id}            │   │
//! │  │                              ► GET {base}/products/{id}         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - The `CatalogApi` trait
//! - [`client`] - reqwest implementation and its configuration
//! - [`types`] - Wire payloads
//! - [`error`] - Catalog error types

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::CatalogApi;
pub use client::{CatalogClient, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
