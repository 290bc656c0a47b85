//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It turns a cart of quantities and
//! gift-wrap choices into a priced order, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-cli (apps/tally-cli)                   │   │
//! │  │    Prompts / cart file ──► config ──► receipt renderer         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ compute_order() (once per run)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │ discount  │  │   order   │  │   │
//! │  │   │  Product  │  │ CartLine  │  │  4 rules  │  │  fees &   │  │   │
//! │  │   │  prices   │  │   Cart    │  │  select   │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PROMPTS • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Fixed product catalog (name -> unit price)
//! - [`cart`] - Cart lines keyed by product name
//! - [`discount`] - The four discount rules and best-offer selection
//! - [`order`] - Cost aggregation: subtotal, discount, gift wrap, shipping
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{compute_order, Cart, Catalog, DiscountRule, Money, Product};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("Product A", Money::from_cents(2000)),
//!     Product::new("Product B", Money::from_cents(4000)),
//! ])
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.set_line("Product A", 5, false).unwrap();
//! cart.set_line("Product B", 3, true).unwrap();
//!
//! let order = compute_order(
//!     &cart,
//!     Money::from_cents(100),
//!     Money::from_cents(500),
//!     &catalog,
//! )
//! .unwrap();
//!
//! assert_eq!(order.discount.rule, DiscountRule::Flat10);
//! assert_eq!(order.total.cents(), 21600); // $216.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use discount::{select_discount, DiscountCandidates, DiscountOffer, DiscountRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{compute_order, OrderResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Number of items that fit into one shipping package.
pub const ITEMS_PER_PACKAGE: i64 = 10;

/// Highest unit price a catalog accepts, in cents ($1,000,000.00).
///
/// ## Business Reason
/// Together with [`MAX_ITEM_QUANTITY`], [`MAX_FEE_CENTS`] and
/// [`MAX_CATALOG_PRODUCTS`] this keeps every order amount far inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Highest gift wrap or shipping fee accepted, in cents ($1,000,000.00).
pub const MAX_FEE_CENTS: i64 = 100_000_000;

/// Most products a single catalog may carry.
pub const MAX_CATALOG_PRODUCTS: usize = 1_000;
