//! # Cart
//!
//! The shopping cart: an ordered list of [`Item`] entries.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation                 State Change                                 │
//! │  ─────────                 ────────────                                 │
//! │                                                                         │
//! │  add_item(item) ─────────► items.push(item)        (never merges)      │
//! │                                                                         │
//! │  remove_item(&id) ───────► items.remove(first idx with id)             │
//! │                                                                         │
//! │  clear() ────────────────► items.clear()                               │
//! │                                                                         │
//! │  items() / len() / is_empty() / total() ──► (read only)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! `total()` sums each entry's `price` once. Quantity does not multiply
//! into it; adding a $0.99 item twice gives $1.98 via two entries.
//! `total_quantity()` reports quantities separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tally_core::validation::validate_quantity_up_to;
use tally_core::{Item, ItemId, Money};
use tracing::debug;

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Duplicates are allowed (same `ItemId` may appear more than once)
/// - `len() <= config.max_items`
///
/// Serialize-only: a cart is never loaded back, so the limit cannot be
/// bypassed by deserializing an oversized item list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<Item>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,

    #[serde(skip)]
    config: CartConfig,
}

impl Cart {
    /// Creates a new empty cart with default limits.
    pub fn new() -> Self {
        Self::empty(CartConfig::default())
    }

    /// Creates a new empty cart with the given limits.
    ///
    /// ## Errors
    /// [`CartError::InvalidConfig`] if `config` fails [`CartConfig::validate`].
    pub fn with_config(config: CartConfig) -> CartResult<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: CartConfig) -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
            config,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current contents, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends an item to the end of the cart.
    ///
    /// ## Behavior
    /// - Never merges with an existing entry, even one with the same id
    ///
    /// ## Errors
    /// - [`CartError::CartFull`] when `max_items` entries are present
    /// - [`CartError::Core`] when the item's quantity exceeds `max_item_quantity`
    pub fn add_item(&mut self, item: Item) -> CartResult<()> {
        if self.items.len() >= self.config.max_items {
            return Err(CartError::CartFull {
                max: self.config.max_items,
            });
        }
        validate_quantity_up_to(item.quantity(), self.config.max_item_quantity)?;

        debug!(
            item_id = %item.id(),
            name = item.name(),
            price = %item.price(),
            len = self.items.len() + 1,
            "add_item"
        );
        self.items.push(item);
        Ok(())
    }

    /// Removes the first entry with the given id and returns it.
    ///
    /// ## Errors
    /// [`CartError::ItemNotInCart`] if no entry has that id; the cart is
    /// left unchanged.
    pub fn remove_item(&mut self, id: &ItemId) -> CartResult<Item> {
        let index = self
            .items
            .iter()
            .position(|i| i.id() == *id)
            .ok_or(CartError::ItemNotInCart(*id))?;

        let removed = self.items.remove(index);
        debug!(item_id = %id, len = self.items.len(), "remove_item");
        Ok(removed)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        debug!(dropped = self.items.len(), "clear");
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Number of entries in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price` over all entries.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Sum of `quantity` over all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(Item::quantity).sum()
    }

    /// The total rendered with the configured currency symbol.
    pub fn formatted_total(&self) -> String {
        self.config.format_amount(self.total())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::MAX_PRICE_CENTS;

    fn apple() -> Item {
        Item::new("apple", Money::from_cents(99)).unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_same_item_twice_appends() {
        let mut cart = Cart::new();
        let item = apple();

        cart.add_item(item.clone()).unwrap();
        cart.add_item(item.clone()).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0], item);
        assert_eq!(cart.items()[1], item);
        assert_eq!(cart.total(), Money::from_cents(198));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        let names = ["apple", "bread", "cheese"];
        for name in names {
            cart.add_item(Item::new(name, Money::from_cents(100)).unwrap())
                .unwrap();
        }
        let got: Vec<&str> = cart.items().iter().map(Item::name).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut cart = Cart::new();
        let item = apple();
        let bread = Item::new("bread", Money::from_cents(250)).unwrap();

        cart.add_item(item.clone()).unwrap();
        cart.add_item(bread.clone()).unwrap();
        cart.add_item(item.clone()).unwrap();

        let removed = cart.remove_item(&item.id()).unwrap();
        assert_eq!(removed, item);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0], bread);
        assert_eq!(cart.items()[1], item);
    }

    #[test]
    fn test_remove_missing_item_is_error_and_no_op() {
        let mut cart = Cart::new();
        cart.add_item(apple()).unwrap();

        let stranger = apple();
        let err = cart.remove_item(&stranger.id()).unwrap_err();
        assert!(matches!(err, CartError::ItemNotInCart(id) if id == stranger.id()));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_ignores_quantity() {
        let mut cart = Cart::new();
        let bulk = apple().with_quantity(3).unwrap();
        cart.add_item(bulk).unwrap();

        assert_eq!(cart.total(), Money::from_cents(99));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_cart_full() {
        let config = CartConfig {
            max_items: 2,
            ..CartConfig::default()
        };
        let mut cart = Cart::with_config(config).unwrap();
        cart.add_item(apple()).unwrap();
        cart.add_item(apple()).unwrap();

        let err = cart.add_item(apple()).unwrap_err();
        assert!(matches!(err, CartError::CartFull { max: 2 }));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_quantity_limit_from_config() {
        let config = CartConfig {
            max_item_quantity: 2,
            ..CartConfig::default()
        };
        let mut cart = Cart::with_config(config).unwrap();

        assert!(cart.add_item(apple().with_quantity(2).unwrap()).is_ok());
        assert!(matches!(
            cart.add_item(apple().with_quantity(3).unwrap()),
            Err(CartError::Core(_))
        ));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_with_config_rejects_invalid_limits() {
        let config = CartConfig {
            max_items: 0,
            ..CartConfig::default()
        };
        assert!(matches!(
            Cart::with_config(config),
            Err(CartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_total_of_full_cart_at_max_price() {
        let config = CartConfig {
            max_items: 3,
            ..CartConfig::default()
        };
        let mut cart = Cart::with_config(config).unwrap();
        let gold = Item::new("gold", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        for _ in 0..3 {
            cart.add_item(gold.clone()).unwrap();
        }
        assert_eq!(cart.total(), Money::from_cents(3 * MAX_PRICE_CENTS));

        assert!(Item::new("gold", Money::from_cents(i64::MAX)).is_err());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(apple()).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(apple()).unwrap();
        cart.add_item(apple().with_quantity(2).unwrap()).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(
            totals,
            CartTotals {
                item_count: 2,
                total_quantity: 3,
                total_cents: 198,
            }
        );

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["totalCents"], 198);
        assert_eq!(cart.formatted_total(), "$1.98");
    }

    #[test]
    fn test_cart_serializes_without_config() {
        let mut cart = Cart::new();
        cart.add_item(apple()).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("config").is_none());
    }
}
