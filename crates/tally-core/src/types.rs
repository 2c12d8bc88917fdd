//! # Domain Types
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                 Item                    │
//! │  ─────────────────────────────────────  │
//! │  id        ItemId (UUID v4, immutable)  │
//! │  name      String                       │
//! │  price     Money   (>= 0)               │
//! │  quantity  i64     (>= 1, default 1)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two items with the same name and price are still different items.
//! Carts match on [`ItemId`] only; adding one `Item` twice means two
//! entries sharing an id.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price, validate_quantity, validate_uuid};

// =============================================================================
// Item Id
// =============================================================================

/// Unique identifier of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_uuid(s).map(ItemId)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A cart line entry.
///
/// Fields are read through accessors so that an `Item` always satisfies the
/// rules checked in [`Item::new`]. Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Money,
    quantity: i64,
}

impl Item {
    /// Creates an item with quantity 1 and a fresh id.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Item, Money};
    ///
    /// let apple = Item::new("apple", "0.99".parse()?)?;
    /// assert_eq!(apple.name(), "apple");
    /// assert_eq!(apple.price(), Money::from_cents(99));
    /// assert_eq!(apple.quantity(), 1);
    /// # Ok::<(), tally_core::CoreError>(())
    /// ```
    ///
    /// ## Errors
    /// - Empty or over-long name
    /// - Negative price
    pub fn new(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        Ok(Item {
            id: ItemId::new(),
            name: name.trim().to_string(),
            price,
            quantity: 1,
        })
    }

    /// Returns the item with a different quantity.
    pub fn with_quantity(mut self, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(self)
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// Unchecked wire shape of an [`Item`].
#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    name: String,
    price: Money,
    quantity: i64,
}

impl ItemRecord {
    fn validate(self) -> Result<Item, ValidationError> {
        validate_item_name(&self.name)?;
        validate_price(self.price)?;
        validate_quantity(self.quantity)?;

        Ok(Item {
            id: self.id,
            name: self.name.trim().to_string(),
            price: self.price,
            quantity: self.quantity,
        })
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ItemRecord::deserialize(deserializer)?
            .validate()
            .map_err(de::Error::custom)
    }
}
