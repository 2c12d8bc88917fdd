//! # Cart Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_MAX_CART_ITEMS=50                                            │
//! │     TALLY_MAX_ITEM_QUANTITY=10                                         │
//! │     TALLY_CURRENCY_SYMBOL=€                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tally/cart.toml (Linux)                                  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     100 items, quantity 999, "$"                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml
//! max_items = 100
//! max_item_quantity = 999
//! currency_symbol = "$"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tally_core::{Money, MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};
use tracing::{debug, info, warn};

use crate::error::{CartError, CartResult};

pub const ENV_MAX_CART_ITEMS: &str = "TALLY_MAX_CART_ITEMS";
pub const ENV_MAX_ITEM_QUANTITY: &str = "TALLY_MAX_ITEM_QUANTITY";
pub const ENV_CURRENCY_SYMBOL: &str = "TALLY_CURRENCY_SYMBOL";

/// Limits and display settings for a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Maximum number of entries in one cart.
    pub max_items: usize,

    /// Maximum quantity on a single entry.
    pub max_item_quantity: i64,

    /// Prefix used by [`CartConfig::format_amount`].
    pub currency_symbol: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            max_items: MAX_CART_ITEMS,
            max_item_quantity: MAX_ITEM_QUANTITY,
            currency_symbol: "$".to_string(),
        }
    }
}

impl CartConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`cart.toml`), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CartResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses and validates an inline TOML document. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(contents: &str) -> CartResult<Self> {
        let config: CartConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CartResult<()> {
        if self.max_items == 0 {
            return Err(CartError::InvalidConfig(
                "max_items must be greater than 0".into(),
            ));
        }

        // A full cart of maximum-price items must still total within i64.
        let ceiling = i64::MAX / MAX_PRICE_CENTS;
        if i64::try_from(self.max_items).map_or(true, |n| n > ceiling) {
            return Err(CartError::InvalidConfig(format!(
                "max_items must be at most {}",
                ceiling
            )));
        }

        if self.max_item_quantity < 1 {
            return Err(CartError::InvalidConfig(
                "max_item_quantity must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Applies `TALLY_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key/value source. Unparseable values are
    /// logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_CART_ITEMS) {
            match raw.parse::<usize>() {
                Ok(max) => {
                    debug!(max_items = max, "Overriding max_items from environment");
                    self.max_items = max;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_MAX_CART_ITEMS),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_ITEM_QUANTITY) {
            match raw.parse::<i64>() {
                Ok(max) => {
                    debug!(max_item_quantity = max, "Overriding max_item_quantity from environment");
                    self.max_item_quantity = max;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_MAX_ITEM_QUANTITY),
            }
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            self.currency_symbol = symbol;
        }
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ```rust
    /// use tally_cart::CartConfig;
    /// use tally_core::Money;
    ///
    /// let config = CartConfig { currency_symbol: "€".into(), ..CartConfig::default() };
    /// assert_eq!(config.format_amount(Money::from_cents(-550)), "-€5.50");
    /// ```
    pub fn format_amount(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().unsigned_abs(),
            amount.cents_part()
        )
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join("cart.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CartConfig::default();
        assert_eq!(config.max_items, 100);
        assert_eq!(config.max_item_quantity, 999);
        assert_eq!(config.currency_symbol, "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CartConfig::default();

        config.max_items = 0;
        assert!(matches!(config.validate(), Err(CartError::InvalidConfig(_))));

        config.max_items = 1;
        config.max_item_quantity = 0;
        assert!(config.validate().is_err());

        config.max_item_quantity = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_items_ceiling_keeps_totals_in_range() {
        let ceiling = (i64::MAX / MAX_PRICE_CENTS) as u64;
        let mut config = CartConfig::default();

        // Only reachable where usize is wider than the ceiling (64-bit).
        if let Ok(at_ceiling) = usize::try_from(ceiling) {
            config.max_items = at_ceiling;
            assert!(config.validate().is_ok());
            config.max_items = at_ceiling + 1;
            assert!(matches!(config.validate(), Err(CartError::InvalidConfig(_))));
            config.max_items = usize::MAX;
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CartConfig::from_toml_str("max_items = 3\n").unwrap();
        assert_eq!(config.max_items, 3);
        assert_eq!(config.max_item_quantity, 999);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(matches!(
            CartConfig::from_toml_str("max_items = \"many\""),
            Err(CartError::ConfigParse(_))
        ));
        assert!(matches!(
            CartConfig::from_toml_str("max_items = 0"),
            Err(CartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CartConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("max_items = 100"));
        assert_eq!(CartConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_MAX_CART_ITEMS, "5"),
            (ENV_MAX_ITEM_QUANTITY, "not-a-number"),
            (ENV_CURRENCY_SYMBOL, "£"),
        ]);

        let mut config = CartConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.max_items, 5);
        assert_eq!(config.max_item_quantity, 999);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tally-cart-{}.toml", std::process::id()));
        std::fs::write(&path, "max_items = 7\ncurrency_symbol = \"¥\"\n").unwrap();

        let loaded = CartConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).ok();

        let config = loaded.unwrap();
        assert_eq!(config.max_items, 7);
        assert_eq!(config.currency_symbol, "¥");
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let path = std::env::temp_dir().join(format!("tally-cart-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "max_items = [").unwrap();

        let config = CartConfig::load_or_default(Some(path.clone()));
        std::fs::remove_file(&path).ok();

        assert_eq!(config.max_items, CartConfig::default().max_items);
    }

    #[test]
    fn test_format_amount() {
        let config = CartConfig::default();
        assert_eq!(config.format_amount(Money::from_cents(198)), "$1.98");
        assert_eq!(config.format_amount(Money::zero()), "$0.00");
        assert_eq!(
            config.format_amount(Money::from_cents(i64::MIN)),
            "-$92233720368547758.08"
        );
    }
}
