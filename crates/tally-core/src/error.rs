//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing / catalog errors                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-cli errors (separate crate)                                     │
//! │  └── AppError         - Config, prompt and file failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → "Error: ..." on stderr │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Pricing math itself never fails; only malformed input does

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// These represent a cart or catalog that the pricing rules cannot be
/// applied to. The arithmetic itself has no failure modes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart line names a product that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - A cart file lists a product the configured catalog doesn't carry
    /// - The catalog was reconfigured between building and pricing a cart
    #[error("Product not found in catalog: {0}")]
    ProductNotFound(String),

    /// A catalog must carry at least one product.
    #[error("Catalog has no products")]
    EmptyCatalog,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pricing runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a quantity that isn't a whole number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same product listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
