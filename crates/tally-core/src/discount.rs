//! # Discount Selection
//!
//! Evaluates the four discount rules against a cart and keeps the single
//! most beneficial one. Discounts never stack.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule        Trigger                        Amount                      │
//! │  ──────────  ─────────────────────────────  ──────────────────────────  │
//! │  Flat-10     cart total > $200              $10                        │
//! │  Bulk-5      any line quantity > 10         5% of that line (MAX)      │
//! │  Bulk-10     total quantity > 20            10% of cart total          │
//! │  Tiered-50   any line quantity > 15         50% of units beyond 15     │
//! │                                             (SUM across lines)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection
//! The strictly largest amount wins. On a tie the earlier rule in
//! [`DiscountRule::ALL`] wins, so an order with no qualifying discount
//! reports `flat_10_discount` at $0.00.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Rule Parameters
// =============================================================================

/// Cart total that must be exceeded for Flat-10.
pub const FLAT_10_THRESHOLD: Money = Money::from_dollars(200);

/// Flat-10 amount.
pub const FLAT_10_AMOUNT: Money = Money::from_dollars(10);

/// A line needs more than this many units for Bulk-5.
pub const BULK_5_MIN_QUANTITY: i64 = 10;

/// Bulk-5 rate (5%).
pub const BULK_5_RATE_BPS: u32 = 500;

/// The cart needs more than this many units in total for Bulk-10.
pub const BULK_10_MIN_TOTAL_QUANTITY: i64 = 20;

/// Bulk-10 rate (10%).
pub const BULK_10_RATE_BPS: u32 = 1000;

/// Units of a line priced normally before Tiered-50 applies.
pub const TIERED_50_FULL_PRICE_UNITS: i64 = 15;

/// Tiered-50 rate (50%).
pub const TIERED_50_RATE_BPS: u32 = 5000;

// =============================================================================
// Discount Rule
// =============================================================================

/// One of the four named discount offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountRule {
    #[serde(rename = "flat_10_discount")]
    Flat10,
    #[serde(rename = "bulk_5_discount")]
    Bulk5,
    #[serde(rename = "bulk_10_discount")]
    Bulk10,
    #[serde(rename = "tiered_50_discount")]
    Tiered50,
}

impl DiscountRule {
    /// Every rule, in tie-break order.
    pub const ALL: [DiscountRule; 4] = [
        DiscountRule::Flat10,
        DiscountRule::Bulk5,
        DiscountRule::Bulk10,
        DiscountRule::Tiered50,
    ];

    /// Label printed on receipts and used in JSON output.
    pub const fn label(&self) -> &'static str {
        match self {
            DiscountRule::Flat10 => "flat_10_discount",
            DiscountRule::Bulk5 => "bulk_5_discount",
            DiscountRule::Bulk10 => "bulk_10_discount",
            DiscountRule::Tiered50 => "tiered_50_discount",
        }
    }
}

impl fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Discount Offer
// =============================================================================

/// The winning rule and the amount it takes off the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountOffer {
    pub rule: DiscountRule,
    pub amount: Money,
}

// =============================================================================
// Candidates
// =============================================================================

/// All four candidate amounts for one cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscountCandidates {
    pub flat_10: Money,
    pub bulk_5: Money,
    pub bulk_10: Money,
    pub tiered_50: Money,
}

impl DiscountCandidates {
    /// Computes every candidate from a single pass over the cart.
    pub fn evaluate(cart_total: Money, cart: &Cart, catalog: &Catalog) -> CoreResult<Self> {
        let flat_10 = if cart_total > FLAT_10_THRESHOLD {
            FLAT_10_AMOUNT
        } else {
            Money::zero()
        };

        let mut bulk_5 = Money::zero();
        let mut tiered_50 = Money::zero();
        let mut total_quantity = 0;

        for line in cart.iter() {
            let price = catalog.require_price(&line.product)?;
            total_quantity += line.quantity;

            if line.quantity > BULK_5_MIN_QUANTITY {
                let line_discount = line.line_total(price).percentage(BULK_5_RATE_BPS);
                bulk_5 = bulk_5.max(line_discount);
            }

            if line.quantity > TIERED_50_FULL_PRICE_UNITS {
                let beyond = line.quantity - TIERED_50_FULL_PRICE_UNITS;
                tiered_50 += price
                    .multiply_quantity(beyond)
                    .percentage(TIERED_50_RATE_BPS);
            }
        }

        let bulk_10 = if total_quantity > BULK_10_MIN_TOTAL_QUANTITY {
            cart_total.percentage(BULK_10_RATE_BPS)
        } else {
            Money::zero()
        };

        Ok(DiscountCandidates {
            flat_10,
            bulk_5,
            bulk_10,
            tiered_50,
        })
    }

    /// Returns the candidate amount for a rule.
    pub fn amount(&self, rule: DiscountRule) -> Money {
        match rule {
            DiscountRule::Flat10 => self.flat_10,
            DiscountRule::Bulk5 => self.bulk_5,
            DiscountRule::Bulk10 => self.bulk_10,
            DiscountRule::Tiered50 => self.tiered_50,
        }
    }

    /// Picks the strictly largest candidate; earlier rules win ties.
    pub fn best(&self) -> DiscountOffer {
        let mut best = DiscountOffer {
            rule: DiscountRule::ALL[0],
            amount: self.amount(DiscountRule::ALL[0]),
        };

        for rule in &DiscountRule::ALL[1..] {
            let amount = self.amount(*rule);
            if amount > best.amount {
                best = DiscountOffer {
                    rule: *rule,
                    amount,
                };
            }
        }

        best
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Selects the most beneficial discount for a cart.
///
/// `cart_total` is the undiscounted subtotal of `cart` priced with `catalog`.
///
/// ## Errors
/// `ProductNotFound` if a cart line names a product the catalog doesn't carry.
///
/// ## Example
/// ```rust
/// use tally_core::{select_discount, Cart, Catalog, DiscountRule, Money, Product};
///
/// let catalog = Catalog::new(vec![Product::new("Product A", Money::from_dollars(20))]).unwrap();
/// let mut cart = Cart::new();
/// cart.set_line("Product A", 12, false).unwrap();
///
/// let offer = select_discount(Money::from_dollars(240), &cart, &catalog).unwrap();
/// assert_eq!(offer.rule, DiscountRule::Bulk5);
/// assert_eq!(offer.amount, Money::from_dollars(12));
/// ```
pub fn select_discount(
    cart_total: Money,
    cart: &Cart,
    catalog: &Catalog,
) -> CoreResult<DiscountOffer> {
    let candidates = DiscountCandidates::evaluate(cart_total, cart, catalog)?;
    let offer = candidates.best();

    debug!(
        %cart_total,
        flat_10 = %candidates.flat_10,
        bulk_5 = %candidates.bulk_5,
        bulk_10 = %candidates.bulk_10,
        tiered_50 = %candidates.tiered_50,
        selected = %offer.rule,
        "Discount selected"
    );

    Ok(offer)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::error::CoreError;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Product A", Money::from_dollars(20)),
            Product::new("Product B", Money::from_dollars(40)),
            Product::new("Product C", Money::from_dollars(50)),
        ])
        .unwrap()
    }

    fn cart(lines: &[(&str, i64)]) -> Cart {
        let mut cart = Cart::new();
        for (product, qty) in lines {
            cart.set_line(*product, *qty, false).unwrap();
        }
        cart
    }

    fn candidates(lines: &[(&str, i64)]) -> DiscountCandidates {
        let catalog = catalog();
        let cart = cart(lines);
        let total = cart.subtotal(&catalog).unwrap();
        DiscountCandidates::evaluate(total, &cart, &catalog).unwrap()
    }

    #[test]
    fn test_flat_10_needs_more_than_200() {
        // Exactly $200 does not qualify
        assert!(candidates(&[("Product A", 10)]).flat_10.is_zero());
        assert_eq!(
            candidates(&[("Product A", 10), ("Product B", 1)]).flat_10,
            Money::from_dollars(10)
        );
    }

    #[test]
    fn test_bulk_5_takes_max_line_not_sum() {
        // A: 11 × $20 = $220 → $11.00; B: 11 × $40 = $440 → $22.00
        let c = candidates(&[("Product A", 11), ("Product B", 11)]);
        assert_eq!(c.bulk_5, Money::from_dollars(22));

        // 10 units is not "more than 10"
        assert!(candidates(&[("Product A", 10)]).bulk_5.is_zero());
    }

    #[test]
    fn test_bulk_10_uses_total_quantity() {
        // 20 units total: no
        assert!(candidates(&[("Product A", 10), ("Product B", 10)])
            .bulk_10
            .is_zero());

        // 21 units across lines: 10% of $20×10 + $40×11 = $64.00
        let c = candidates(&[("Product A", 10), ("Product B", 11)]);
        assert_eq!(c.bulk_10, Money::from_dollars(64));

        let catalog = catalog();
        let cart = cart(&[("Product A", 10), ("Product B", 11)]);
        let offer = select_discount(Money::from_dollars(640), &cart, &catalog).unwrap();
        assert_eq!(offer.rule, DiscountRule::Bulk10);
        assert_eq!(offer.amount, Money::from_dollars(64));
    }

    #[test]
    fn test_tiered_50_sums_lines() {
        // A: (16-15) × $20 × 0.5 = $10; C: (18-15) × $50 × 0.5 = $75
        let c = candidates(&[("Product A", 16), ("Product C", 18)]);
        assert_eq!(c.tiered_50, Money::from_dollars(85));

        assert!(candidates(&[("Product A", 15)]).tiered_50.is_zero());
    }

    #[test]
    fn test_all_zero_selects_flat_10() {
        let offer = candidates(&[("Product A", 1)]).best();
        assert_eq!(offer.rule, DiscountRule::Flat10);
        assert!(offer.amount.is_zero());
    }

    #[test]
    fn test_tie_keeps_earlier_rule() {
        let c = DiscountCandidates {
            flat_10: Money::from_dollars(10),
            bulk_5: Money::from_dollars(10),
            bulk_10: Money::zero(),
            tiered_50: Money::zero(),
        };
        assert_eq!(c.best().rule, DiscountRule::Flat10);

        let c = DiscountCandidates {
            flat_10: Money::zero(),
            bulk_5: Money::from_dollars(3),
            bulk_10: Money::from_dollars(50),
            tiered_50: Money::from_dollars(50),
        };
        assert_eq!(c.best().rule, DiscountRule::Bulk10);
    }

    #[test]
    fn test_tie_from_real_cart() {
        // X: 11 × $18.18 = $199.98 → 5% = 999.9 cents → $10.00, same as Flat-10
        let catalog = Catalog::new(vec![
            Product::new("X", Money::from_cents(1818)),
            Product::new("Y", Money::from_dollars(50)),
        ])
        .unwrap();
        let mut cart = Cart::new();
        cart.set_line("X", 11, false).unwrap();
        cart.set_line("Y", 1, false).unwrap();
        let total = cart.subtotal(&catalog).unwrap();
        assert_eq!(total.cents(), 24998);

        let offer = select_discount(total, &cart, &catalog).unwrap();
        assert_eq!(offer.rule, DiscountRule::Flat10);
        assert_eq!(offer.amount, Money::from_dollars(10));
    }

    #[test]
    fn test_scenario_c_picks_tiered_50() {
        let c = candidates(&[("Product A", 25)]);
        assert_eq!(c.flat_10, Money::from_dollars(10));
        assert_eq!(c.bulk_5, Money::from_dollars(25));
        assert_eq!(c.bulk_10, Money::from_dollars(50));
        assert_eq!(c.tiered_50, Money::from_dollars(100));
        assert_eq!(
            c.best(),
            DiscountOffer {
                rule: DiscountRule::Tiered50,
                amount: Money::from_dollars(100),
            }
        );
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let catalog = catalog();
        let cart = cart(&[("Product Z", 3)]);
        let err = select_discount(Money::zero(), &cart, &catalog).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_labels_and_serialization() {
        let labels: Vec<&str> = DiscountRule::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![
                "flat_10_discount",
                "bulk_5_discount",
                "bulk_10_discount",
                "tiered_50_discount"
            ]
        );
        assert_eq!(DiscountRule::Bulk10.to_string(), "bulk_10_discount");
        assert_eq!(
            serde_json::to_string(&DiscountRule::Tiered50).unwrap(),
            "\"tiered_50_discount\""
        );
    }
}
