//! # tally-cart: In-Memory Cart Store
//!
//! ## Modules
//! - [`cart`] - `Cart` value and `CartTotals` summary
//! - [`state`] - `CartState`, a shareable handle around one cart
//! - [`config`] - `CartConfig` (TOML file + `TALLY_*` env overrides)
//! - [`error`] - `CartError`
//!
//! ## Example
//! ```rust
//! use tally_cart::{create_item, Cart};
//! use tally_core::Money;
//!
//! let mut cart = Cart::new();
//! let apple = create_item("apple", "0.99".parse()?)?;
//!
//! cart.add_item(apple.clone())?;
//! cart.add_item(apple.clone())?;
//! assert_eq!(cart.len(), 2);
//! assert_eq!(cart.total(), Money::from_cents(198));
//!
//! cart.remove_item(&apple.id())?;
//! assert_eq!(cart.len(), 1);
//! # Ok::<(), tally_cart::CartError>(())
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod state;

pub use cart::{Cart, CartTotals};
pub use config::CartConfig;
pub use error::{CartError, CartResult};
pub use state::CartState;

use tally_core::{CoreResult, Item, Money};
use tracing_subscriber::EnvFilter;

/// Creates an item with quantity 1. Shorthand for [`Item::new`].
pub fn create_item(name: impl Into<String>, price: Money) -> CoreResult<Item> {
    Item::new(name, price)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_cart=trace` - Show trace for the cart crate only
/// - Default: `info,tally_cart=debug`
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_cart=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
