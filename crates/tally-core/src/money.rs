//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats, a 5% bulk discount on 3 × $6.30 is 0.9450000000000001    │
//! │  and "total = discounted + wrap + shipping" can drift by a fraction.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    1890 cents × 500 bps = 94.5 cents → rounds half up to 95 cents      │
//! │    Every sum afterwards is exact integer addition                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_dollars(20); // $20.00
//! let line_total = price * 12;         // $240.00
//! let bulk_5 = line_total.percentage(500);
//! assert_eq!(bulk_5.cents(), 1200);    // $12.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Basis points in 100%.
const BPS_PER_WHOLE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: A discounted subtotal is allowed to go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as plain cents**: `{"total": 21600}`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► line total (× quantity) ──► subtotal                │
/// │                                                    │                    │
/// │                          discount candidates ◄─────┤                    │
/// │                                                    ▼                    │
/// │  gift wrap fee + shipping fee + discounted subtotal ──► total          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(200).cents(), 20000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_dollars(40);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 12000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns `bps` basis points of this amount, rounded half up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(50000); // $500.00
    /// assert_eq!(subtotal.percentage(1000).cents(), 5000); // 10% = $50.00
    ///
    /// let odd = Money::from_cents(1001);
    /// assert_eq!(odd.percentage(5000).cents(), 501); // 500.5 → 501
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 keeps cents * bps from overflowing on large carts
        let cents = (self.0 as i128 * bps as i128 + BPS_PER_WHOLE / 2) / BPS_PER_WHOLE;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$216.00` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity or a package count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_dollars() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);

        assert_eq!(Money::from_dollars(50), Money::from_cents(5000));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(21600)), "$216.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(-50)), "-$0.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((a * 3).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 650]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_exact() {
        // 5% of 12 × $20.00
        assert_eq!(Money::from_cents(24000).percentage(500).cents(), 1200);
        // 50% of 10 × $20.00
        assert_eq!(Money::from_cents(20000).percentage(5000).cents(), 10000);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 5% of $18.90 = 94.5 cents
        assert_eq!(Money::from_cents(1890).percentage(500).cents(), 95);
        // 5% of $18.89 = 94.45 cents
        assert_eq!(Money::from_cents(1889).percentage(500).cents(), 94);
        assert_eq!(Money::zero().percentage(5000), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), zero);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(21600)).unwrap();
        assert_eq!(json, "21600");
    }
}
