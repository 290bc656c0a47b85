//! # Checkout Configuration
//!
//! Fee schedule and product catalog for a checkout run.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                               │
//! │     gift wrap $1.00, shipping $5.00 / package, Products A/B/C          │
//! │                                                                         │
//! │  2. Config file                                                        │
//! │     --config <path>, or                                                │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  3. Environment                                                        │
//! │     TALLY_GIFT_WRAP_FEE_CENTS, TALLY_SHIPPING_FEE_CENTS                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! [fees]
//! gift_wrap_fee_cents = 100
//! shipping_fee_per_package_cents = 500
//!
//! [[products]]
//! name = "Product A"
//! price_cents = 2000
//!
//! [[products]]
//! name = "Product B"
//! price_cents = 4000
//! ```
//!
//! The catalog is read once and handed to the core as an immutable value.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::validation::validate_fee_cents;
use tally_core::{Catalog, Money, Product};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Environment variable overriding the gift wrap fee.
pub const ENV_GIFT_WRAP_FEE: &str = "TALLY_GIFT_WRAP_FEE_CENTS";

/// Environment variable overriding the shipping fee per package.
pub const ENV_SHIPPING_FEE: &str = "TALLY_SHIPPING_FEE_CENTS";

// =============================================================================
// Fee Settings
// =============================================================================

/// Fees added on top of the discounted subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSettings {
    /// Charged once per gift-wrapped product line.
    #[serde(default = "default_gift_wrap_fee_cents")]
    pub gift_wrap_fee_cents: i64,

    /// Charged once per package of up to 10 items.
    #[serde(default = "default_shipping_fee_cents")]
    pub shipping_fee_per_package_cents: i64,
}

fn default_gift_wrap_fee_cents() -> i64 {
    100
}

fn default_shipping_fee_cents() -> i64 {
    500
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            gift_wrap_fee_cents: default_gift_wrap_fee_cents(),
            shipping_fee_per_package_cents: default_shipping_fee_cents(),
        }
    }
}

// =============================================================================
// Product Settings
// =============================================================================

/// One catalog entry as written in `tally.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSettings {
    pub name: String,
    pub price_cents: i64,
}

impl ProductSettings {
    fn new(name: &str, price_cents: i64) -> Self {
        Self {
            name: name.to_string(),
            price_cents,
        }
    }
}

fn default_products() -> Vec<ProductSettings> {
    vec![
        ProductSettings::new("Product A", 2000),
        ProductSettings::new("Product B", 4000),
        ProductSettings::new("Product C", 5000),
    ]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Gift wrap and shipping fees.
    #[serde(default)]
    pub fees: FeeSettings,

    /// Catalog products, in prompt order.
    #[serde(default = "default_products")]
    pub products: Vec<ProductSettings>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            fees: FeeSettings::default(),
            products: default_products(),
        }
    }
}

impl TallyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (tally.toml), when present
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            // An explicit path must exist
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading tally config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses config from TOML text. Missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates fees and catalog.
    pub fn validate(&self) -> AppResult<()> {
        validate_fee_cents("gift wrap fee", self.fees.gift_wrap_fee_cents)?;
        validate_fee_cents(
            "shipping fee per package",
            self.fees.shipping_fee_per_package_cents,
        )?;

        if self.products.is_empty() {
            return Err(AppError::InvalidConfig(
                "at least one product must be configured".into(),
            ));
        }

        self.catalog()?;
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup. Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_GIFT_WRAP_FEE) {
            match value.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding gift wrap fee from environment");
                    self.fees.gift_wrap_fee_cents = cents;
                }
                Err(_) => warn!(key = ENV_GIFT_WRAP_FEE, %value, "Ignoring unparsable fee"),
            }
        }

        if let Some(value) = lookup(ENV_SHIPPING_FEE) {
            match value.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding shipping fee from environment");
                    self.fees.shipping_fee_per_package_cents = cents;
                }
                Err(_) => warn!(key = ENV_SHIPPING_FEE, %value, "Ignoring unparsable fee"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join("tally.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Builds the immutable catalog handed to the core.
    pub fn catalog(&self) -> AppResult<Catalog> {
        let products = self
            .products
            .iter()
            .map(|p| Product::new(p.name.trim(), Money::from_cents(p.price_cents)))
            .collect();
        Ok(Catalog::new(products)?)
    }

    /// Gift wrap fee per wrapped line.
    pub fn gift_wrap_fee(&self) -> Money {
        Money::from_cents(self.fees.gift_wrap_fee_cents)
    }

    /// Shipping fee per package.
    pub fn shipping_fee_per_package(&self) -> Money {
        Money::from_cents(self.fees.shipping_fee_per_package_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.gift_wrap_fee(), Money::from_cents(100));
        assert_eq!(config.shipping_fee_per_package(), Money::from_cents(500));

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.price("Product B"), Some(Money::from_dollars(40)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let config = TallyConfig::from_toml_str(
            r#"
            [fees]
            gift_wrap_fee_cents = 250
            shipping_fee_per_package_cents = 799

            [[products]]
            name = "Mug"
            price_cents = 1250
            "#,
        )
        .unwrap();

        assert_eq!(config.fees.gift_wrap_fee_cents, 250);
        assert_eq!(config.fees.shipping_fee_per_package_cents, 799);
        assert_eq!(config.products, vec![ProductSettings::new("Mug", 1250)]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = TallyConfig::from_toml_str("[fees]\ngift_wrap_fee_cents = 0\n").unwrap();
        assert_eq!(config.fees.gift_wrap_fee_cents, 0);
        assert_eq!(config.fees.shipping_fee_per_package_cents, 500);
        assert_eq!(config.products.len(), 3);

        assert_eq!(TallyConfig::from_toml_str("").unwrap(), TallyConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TallyConfig::from_toml_str("[fees\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = TallyConfig::default();
        config.fees.shipping_fee_per_package_cents = -1;
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        let mut config = TallyConfig::default();
        config.products.clear();
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        let mut config = TallyConfig::default();
        config.products.push(ProductSettings::new("Product A", 100));
        assert!(matches!(config.validate(), Err(AppError::Core(_))));

        let mut config = TallyConfig::default();
        config.products[0].price_cents = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_GIFT_WRAP_FEE, "0"), (ENV_SHIPPING_FEE, " 650 ")]
            .into_iter()
            .collect();

        let mut config = TallyConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.fees.gift_wrap_fee_cents, 0);
        assert_eq!(config.fees.shipping_fee_per_package_cents, 650);
    }

    #[test]
    fn test_unparsable_override_is_ignored() {
        let mut config = TallyConfig::default();
        config.apply_overrides(|key| (key == ENV_SHIPPING_FEE).then(|| "five".to_string()));
        assert_eq!(config.fees.shipping_fee_per_package_cents, 500);
    }

    #[test]
    fn test_oversized_values_fail_validation() {
        let huge = (i64::MAX / 2).to_string();
        let mut config = TallyConfig::default();
        config.apply_overrides(|key| (key == ENV_SHIPPING_FEE).then(|| huge.clone()));
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        let config = TallyConfig::from_toml_str(&format!(
            "[[products]]\nname = \"Gold\"\nprice_cents = {}\n",
            i64::MAX / 100
        ))
        .unwrap();
        assert!(matches!(config.validate(), Err(AppError::Core(_))));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.toml");
        std::fs::write(
            &path,
            "[[products]]\nname = \"Candle\"\nprice_cents = 1500\n",
        )
        .unwrap();

        let config = TallyConfig::load(Some(path)).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.price("Candle"), Some(Money::from_cents(1500)));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = TallyConfig::load(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoad { .. }));
    }
}
