//! # Cart
//!
//! One order's worth of quantities and gift-wrap choices, keyed by product
//! name.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Input Collector              Cart Method            Cart Change        │
//! │  ───────────────              ───────────            ───────────        │
//! │                                                                         │
//! │  Prompt answered ───────────► set_line() ──────────► insert / replace  │
//! │                                                                         │
//! │  Cart file line ────────────► insert_line() ───────► insert, reject    │
//! │                                                       duplicates        │
//! │                                                                         │
//! │  Pricing ───────────────────► total_quantity() ────► (read only)       │
//! │                               gift_wrapped_count()                      │
//! │                               subtotal()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_product_name, validate_quantity, ValidationResult};

// =============================================================================
// Cart Line
// =============================================================================

/// Quantity and gift-wrap choice for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog product name.
    pub product: String,

    /// Units ordered (0 is allowed).
    pub quantity: i64,

    /// Whether this product is gift wrapped.
    #[serde(default)]
    pub gift_wrapped: bool,
}

impl CartLine {
    /// Creates a cart line. Validation happens when it joins a [`Cart`].
    pub fn new(product: impl Into<String>, quantity: i64, gift_wrapped: bool) -> Self {
        CartLine {
            product: product.into(),
            quantity,
            gift_wrapped,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self, unit_price: Money) -> Money {
        unit_price.multiply_quantity(self.quantity)
    }

    /// Strips surrounding whitespace from the product name.
    fn normalized(mut self) -> Self {
        let trimmed = self.product.trim();
        if trimmed.len() != self.product.len() {
            self.product = trimmed.to_string();
        }
        self
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.product)?;
        validate_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product name (setting an existing product replaces it)
/// - Product names carry no surrounding whitespace
/// - Quantities are within 0..=MAX_ITEM_QUANTITY
/// - Lines keep insertion order, which is the order they are rendered in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Sets the quantity and gift-wrap choice for a product.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: replaces its line
    /// - Otherwise: appends a new line
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Cart;
    ///
    /// let mut cart = Cart::new();
    /// cart.set_line("Product A", 5, false).unwrap();
    /// cart.set_line("Product A", 7, true).unwrap();
    ///
    /// assert_eq!(cart.len(), 1);
    /// assert_eq!(cart.total_quantity(), 7);
    /// assert!(cart.set_line("Product B", -1, false).is_err());
    /// ```
    pub fn set_line(
        &mut self,
        product: impl Into<String>,
        quantity: i64,
        gift_wrapped: bool,
    ) -> ValidationResult<()> {
        let line = CartLine::new(product, quantity, gift_wrapped).normalized();
        line.validate()?;

        match self.lines.iter_mut().find(|l| l.product == line.product) {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
        Ok(())
    }

    /// Appends a line, rejecting a product that is already in the cart.
    pub fn insert_line(&mut self, line: CartLine) -> ValidationResult<()> {
        let line = line.normalized();
        line.validate()?;

        if self.get(&line.product).is_some() {
            return Err(ValidationError::Duplicate {
                field: "cart product".to_string(),
                value: line.product,
            });
        }

        self.lines.push(line);
        Ok(())
    }

    /// Looks up the line for a product.
    pub fn get(&self, product: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product == product)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterates lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Returns the number of lines (distinct products).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Counts gift-wrapped lines.
    ///
    /// This counts distinct products, not units: three wrapped units of one
    /// product count once.
    pub fn gift_wrapped_count(&self) -> i64 {
        self.lines.iter().filter(|l| l.gift_wrapped).count() as i64
    }

    /// Calculates Σ quantity × unit price.
    pub fn subtotal(&self, catalog: &Catalog) -> CoreResult<Money> {
        let mut subtotal = Money::zero();
        for line in &self.lines {
            subtotal += line.line_total(catalog.require_price(&line.product)?);
        }
        Ok(subtotal)
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = ValidationError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for line in lines {
            cart.insert_line(line)?;
        }
        Ok(cart)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
