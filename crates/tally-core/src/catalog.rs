//! # Product Catalog
//!
//! The fixed mapping from product name to unit price.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tally.toml / defaults ──► Catalog::new() ──► &Catalog (read-only)     │
//! │                                 │                  │                    │
//! │                          validates names,    passed explicitly to      │
//! │                          prices, duplicates  select_discount and       │
//! │                                              compute_order             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product order is preserved: the input collector prompts in catalog order.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name};
use crate::MAX_CATALOG_PRODUCTS;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the key used by cart lines.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a product. Validation happens when it joins a [`Catalog`].
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, ordered set of products.
///
/// ## Invariants
/// - Between one and `MAX_CATALOG_PRODUCTS` products
/// - Names are non-empty and unique
/// - Every price is positive and at most `MAX_PRICE_CENTS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting anything that breaks the invariants.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Catalog, Money, Product};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Product::new("Product A", Money::from_dollars(20)),
    ///     Product::new("Product B", Money::from_dollars(40)),
    /// ])
    /// .unwrap();
    /// assert_eq!(catalog.price("Product B"), Some(Money::from_dollars(40)));
    ///
    /// assert!(Catalog::new(vec![]).is_err());
    /// ```
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        if products.len() > MAX_CATALOG_PRODUCTS {
            return Err(ValidationError::OutOfRange {
                field: "catalog size".to_string(),
                min: 1,
                max: MAX_CATALOG_PRODUCTS as i64,
            }
            .into());
        }

        for (index, product) in products.iter().enumerate() {
            validate_product_name(&product.name)?;
            validate_price_cents(product.price.cents())?;

            if products[..index].iter().any(|p| p.name == product.name) {
                return Err(ValidationError::Duplicate {
                    field: "product".to_string(),
                    value: product.name.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Looks up a product by name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Returns the unit price of a product, if the catalog carries it.
    pub fn price(&self, name: &str) -> Option<Money> {
        self.get(name).map(|p| p.price)
    }

    /// Returns the unit price or `ProductNotFound`.
    pub fn require_price(&self, name: &str) -> CoreResult<Money> {
        self.price(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// Checks whether the catalog carries a product.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterates products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
