//! # tally-core: Pure Logic for Tally
//!
//! Everything the cart store builds on, as pure functions and value types
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tally-cart (Cart, CartState)                    │   │
//! │  │        add_item, remove_item, total, clear, config, logs       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ geometry  │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ area      │  │   rules   │  │   │
//! │  │   │  ItemId   │  │           │  │ perimeter │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and `ItemId`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`geometry`] - Rectangle and circle helpers
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{geometry, Item, Money};
//!
//! assert_eq!(geometry::area(5.0, 10.0), 50.0);
//!
//! let apple = Item::new("apple", Money::from_cents(99)).unwrap();
//! assert_eq!(apple.quantity(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod geometry;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Item, ItemId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum entries in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Highest accepted price, in cents ($10,000,000.00).
///
/// Keeps any cart total below `i64::MAX` as long as the cart holds fewer
/// than `i64::MAX / MAX_PRICE_CENTS` (about 9.2 billion) entries.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum quantity of a single item.
///
/// Catches typos like 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Returns the greeting `"Hello"`.
pub fn say_hello() -> &'static str {
    "Hello"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_hello() {
        let hello = say_hello();
        assert_eq!(hello, "Hello");
        assert_eq!(hello.len(), 5);
    }
}
