//! # Order Pricing
//!
//! Aggregates a cart into a priced order.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       compute_order()                                   │
//! │                                                                         │
//! │  Cart + Catalog                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. subtotal = Σ quantity × price                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. select_discount(subtotal) ──► best of the four rules               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. discounted subtotal = subtotal - discount                          │
//! │  4. gift wrap = fee × wrapped lines                                    │
//! │  5. shipping  = fee × ceil(total quantity / 10)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. total = discounted subtotal + gift wrap + shipping                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::discount::{select_discount, DiscountOffer};
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_fee_cents;
use crate::ITEMS_PER_PACKAGE;

/// The result of pricing one cart.
///
/// Purely derived: recomputing with the same inputs gives the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    /// Σ quantity × unit price, before any discount.
    pub subtotal: Money,

    /// The single discount applied.
    pub discount: DiscountOffer,

    /// `subtotal - discount.amount`. Not clamped at zero.
    pub discounted_subtotal: Money,

    /// Gift wrap fee × number of wrapped lines.
    pub gift_wrap_fee: Money,

    /// Shipping fee × number of packages.
    pub shipping_fee: Money,

    /// `discounted_subtotal + gift_wrap_fee + shipping_fee`.
    pub total: Money,

    /// Units across every line.
    pub total_quantity: i64,

    /// Packages shipped (10 units each, rounded up).
    pub packages: i64,

    /// Lines with gift wrap selected.
    pub wrapped_lines: i64,
}

impl OrderResult {
    /// Label of the applied discount, e.g. `flat_10_discount`.
    pub fn discount_name(&self) -> &'static str {
        self.discount.rule.label()
    }

    /// Amount taken off the subtotal.
    pub fn discount_amount(&self) -> Money {
        self.discount.amount
    }
}

/// Packages needed to ship `total_quantity` units.
///
/// ## Example
/// ```rust
/// use tally_core::order::packages_for;
///
/// assert_eq!(packages_for(0), 0);
/// assert_eq!(packages_for(10), 1);
/// assert_eq!(packages_for(11), 2);
/// ```
pub fn packages_for(total_quantity: i64) -> i64 {
    if total_quantity <= 0 {
        return 0;
    }
    (total_quantity + ITEMS_PER_PACKAGE - 1) / ITEMS_PER_PACKAGE
}

/// Prices a cart.
///
/// Quantities and prices are already range-checked by [`Cart`] and
/// [`Catalog`]. Fails with `ProductNotFound` for a line naming a product
/// outside `catalog`, or a validation error for a fee outside
/// `0..=MAX_FEE_CENTS`.
pub fn compute_order(
    cart: &Cart,
    gift_wrap_fee_per_unit: Money,
    shipping_fee_per_package: Money,
    catalog: &Catalog,
) -> CoreResult<OrderResult> {
    validate_fee_cents("gift wrap fee", gift_wrap_fee_per_unit.cents())?;
    validate_fee_cents("shipping fee per package", shipping_fee_per_package.cents())?;

    let subtotal = cart.subtotal(catalog)?;
    let discount = select_discount(subtotal, cart, catalog)?;
    let discounted_subtotal = subtotal - discount.amount;

    let wrapped_lines = cart.gift_wrapped_count();
    let gift_wrap_fee = gift_wrap_fee_per_unit * wrapped_lines;

    let total_quantity = cart.total_quantity();
    let packages = packages_for(total_quantity);
    let shipping_fee = shipping_fee_per_package * packages;

    let total = discounted_subtotal + gift_wrap_fee + shipping_fee;

    info!(
        lines = cart.len(),
        %subtotal,
        discount = %discount.rule,
        discount_amount = %discount.amount,
        %total,
        "Order priced"
    );

    Ok(OrderResult {
        subtotal,
        discount,
        discounted_subtotal,
        gift_wrap_fee,
        shipping_fee,
        total,
        total_quantity,
        packages,
        wrapped_lines,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
