//! # Validation Module
//!
//! Input validation utilities for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input collector (tally-cli)                                  │
//! │  ├── Parse "12" → 12, re-prompt on garbage                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core types (Catalog::new, Cart::set_line)                    │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: compute_order                                                │
//! │  └── Cart checked against catalog before any arithmetic                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_price_cents, validate_quantity};
//!
//! assert!(validate_quantity(0).is_ok());
//! assert!(validate_quantity(-1).is_err());
//! assert!(validate_price_cents(2000).is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_FEE_CENTS, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted in a catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "product name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Zero is allowed (product not ordered)
/// - Must not be negative
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(0..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses a quantity typed by a person, then validates it.
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
/// assert!(parse_quantity("twelve").is_err());
/// assert!(parse_quantity("1.5").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", trimmed),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be positive (> 0); a catalog never gives products away
/// - Must not exceed MAX_PRICE_CENTS ($1,000,000.00)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a fee (gift wrap per line, shipping per package) in cents.
///
/// ## Rules
/// - Must be non-negative; zero disables the fee
/// - Must not exceed MAX_FEE_CENTS ($1,000,000.00)
pub fn validate_fee_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_FEE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_FEE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Product A").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("25\n"), Ok(25));

        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("-3"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(2000).is_ok());
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());

        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert_eq!(
            validate_price_cents(MAX_PRICE_CENTS + 1),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_PRICE_CENTS,
            })
        );
        assert!(validate_price_cents(i64::MAX / 100).is_err());
    }

    #[test]
    fn test_validate_fee_cents() {
        assert!(validate_fee_cents("gift wrap fee", 0).is_ok());
        assert!(validate_fee_cents("gift wrap fee", 100).is_ok());

        let err = validate_fee_cents("shipping fee", -5).unwrap_err();
        assert!(err.to_string().starts_with("shipping fee must be between 0"));

        assert!(validate_fee_cents("shipping fee", MAX_FEE_CENTS).is_ok());
        assert!(validate_fee_cents("shipping fee", MAX_FEE_CENTS + 1).is_err());
        assert!(validate_fee_cents("shipping fee", i64::MAX / 2).is_err());
    }
}
