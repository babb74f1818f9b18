//! # Error Types
//!
//! Domain-specific error types for shoecart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoecart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shoecart-db         └── DbError       - Local storage failures        │
//! │  shoecart-catalog    └── CatalogError  - Stock service failures        │
//! │                                                                         │
//! │  storefront app      └── CartError     - Wraps all of the above,       │
//! │                                          becomes a Toast               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → Toast → Shopper       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The product has no line in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - Updating the quantity of a product that was removed meanwhile
    #[error("Product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    /// The requested quantity is above the stock level.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity control: 3 → 4
    ///      │
    ///      ▼
    /// GET /stock/1 → { amount: 3 }
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, available: 3, requested: 4 }
    ///      │
    ///      ▼
    /// Warning toast: "Quantidade solicitada fora de estoque"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// A new product was added while its stock is zero.
    #[error("Product {0} is unavailable")]
    Unavailable(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True when the failure is "not enough stock" for a line already in
    /// the cart. The UI shows these as warnings rather than errors.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CoreError::OutOfStock { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any cart rule runs: CLI arguments, and product payloads
/// coming back from the stock service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
