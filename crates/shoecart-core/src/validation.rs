//! # Validation Module
//!
//! Input validation for Shoecart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI / UI input                                               │
//! │  └── validate_product_id, requested_amount                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Stock service payloads                                       │
//! │  └── validate_product_details (before a snapshot enters the cart)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart rules (cart.rs)                                         │
//! │  └── stock limits, uniqueness by id                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ProductDetails, ProductId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title accepted from the stock service.
pub const MAX_TITLE_LEN: usize = 200;

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a raw product identifier.
///
/// ## Rules
/// - Must be positive (the stock service numbers products from 1)
/// - Must fit in 32 bits
///
/// ## Example
/// ```rust
/// use shoecart_core::validation::validate_product_id;
///
/// assert_eq!(validate_product_id(7).unwrap().get(), 7);
/// assert!(validate_product_id(0).is_err());
/// ```
pub fn validate_product_id(raw: i64) -> ValidationResult<ProductId> {
    if raw <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    u32::try_from(raw)
        .map(ProductId::new)
        .map_err(|_| ValidationError::OutOfRange {
            field: "product id".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        })
}

// =============================================================================
// Quantities
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0); a line with zero units is a removed line
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Normalizes the amount a shopper typed into a quantity control.
///
/// ## Behavior
/// - `amount <= 0` → `None`: the update is ignored, no toast
/// - amounts above `u32::MAX` saturate; the stock check rejects them
///
/// ## Example
/// ```rust
/// use shoecart_core::validation::requested_amount;
///
/// assert_eq!(requested_amount(3), Some(3));
/// assert_eq!(requested_amount(0), None);
/// assert_eq!(requested_amount(-2), None);
/// ```
pub fn requested_amount(amount: i64) -> Option<u32> {
    if amount <= 0 {
        return None;
    }

    Some(u32::try_from(amount).unwrap_or(u32::MAX))
}

// =============================================================================
// Product Payloads
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::OutOfRange {
            field: "title length".to_string(),
            min: 1,
            max: MAX_TITLE_LEN as i64,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates product metadata before it is snapshotted into a line item.
pub fn validate_product_details(details: &ProductDetails) -> ValidationResult<()> {
    validate_title(&details.title)?;
    validate_price(details.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn details(title: &str, cents: i64) -> ProductDetails {
        ProductDetails {
            id: ProductId::new(1),
            title: title.to_string(),
            price: Money::from_cents(cents),
            image: "tenis1.jpg".to_string(),
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id(1), Ok(ProductId::new(1)));
        assert!(validate_product_id(0).is_err());
        assert!(validate_product_id(-4).is_err());
        assert!(matches!(
            validate_product_id(i64::from(u32::MAX) + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_requested_amount_saturates() {
        assert_eq!(requested_amount(i64::MAX), Some(u32::MAX));
        assert_eq!(requested_amount(1), Some(1));
    }

    #[test]
    fn test_validate_product_details() {
        assert!(validate_product_details(&details("Tênis VR Caminhada", 13990)).is_ok());
        assert!(validate_product_details(&details("Brinde", 0)).is_ok());
        assert!(validate_product_details(&details("   ", 13990)).is_err());
        assert!(validate_product_details(&details("Tênis", -1)).is_err());
        assert!(validate_product_details(&details(&"A".repeat(201), 100)).is_err());
    }
}
