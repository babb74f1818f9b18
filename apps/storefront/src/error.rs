//! # Storefront Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shoecart                               │
//! │                                                                         │
//! │  CartStore::add_product(id)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  try_add(id) -> CartResult<()>                                   │  │
//! │  │         │                                                        │  │
//! │  │  Catalog error? ─── CatalogError::Timeout ───────┐              │  │
//! │  │         │                                        │              │  │
//! │  │  Cart rule?  ────── CoreError::OutOfStock ───── CartError       │  │
//! │  │         │                                        │              │  │
//! │  │  Success ─► persist                              ▼              │  │
//! │  │                             warn!(error = %e) + e.toast(op, ..) │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                           "Erro na adição do produto" (error)          │
//! │                    or "Quantidade solicitada fora de estoque" (warning)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures are not part of `CartError`: a failed write is logged
//! and the in-memory cart stays authoritative.
//!
//! `AppError` covers the CLI host only (configuration and bootstrap).

use std::fmt;
use thiserror::Error;

use shoecart_catalog::CatalogError;
use shoecart_core::{CoreError, ValidationError};
use shoecart_db::DbError;

use crate::messages::Messages;
use crate::toast::Toast;

/// The three cart mutations, used to pick the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add,
    Remove,
    Update,
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add => write!(f, "add"),
            CartOp::Remove => write!(f, "remove"),
            CartOp::Update => write!(f, "update"),
        }
    }
}

/// Any fault inside a cart mutation.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stock service call failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A cart rule rejected the change.
    #[error("Cart error: {0}")]
    Core(#[from] CoreError),
}

impl From<ValidationError> for CartError {
    fn from(err: ValidationError) -> Self {
        CartError::Core(CoreError::Validation(err))
    }
}

impl CartError {
    /// Over-stock on a line that is (or would be) in the cart.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::Core(e) if e.is_out_of_stock())
    }

    /// The toast a shopper sees for this fault.
    ///
    /// Over-stock gets the dedicated warning; everything else collapses to
    /// the operation's generic error.
    pub fn toast(&self, op: CartOp, messages: &Messages) -> Toast {
        if self.is_out_of_stock() {
            return Toast::warning(messages.out_of_stock);
        }

        match op {
            CartOp::Add => Toast::error(messages.add_failure),
            CartOp::Remove => Toast::error(messages.remove_failure),
            CartOp::Update => Toast::error(messages.update_failure),
        }
    }
}

/// Result type for cart mutations.
pub type CartResult<T> = Result<T, CartError>;

/// Startup and host errors for the `shoecart` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable or flag has an unusable value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The platform data directory could not be determined.
    #[error("Could not determine app data directory")]
    DataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the CLI host.
pub type AppResult<T> = Result<T, AppError>;
