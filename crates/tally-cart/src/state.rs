//! # Cart State
//!
//! A cart shared by handle instead of living in a global.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`:
//! - `Arc`: cloning a `CartState` hands out another handle to the SAME cart
//! - `Mutex`: each closure passed to `with_cart`/`with_cart_mut` runs with
//!   exclusive access, so one operation is never observed half-done
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  let state = CartState::new();        // fresh per session / test       │
//! │  let handle = state.clone();          // same cart                      │
//! │                                                                         │
//! │  handle.with_cart_mut(|c| c.add_item(item))?;                           │
//! │  assert_eq!(state.with_cart(|c| c.len()), 1);                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cart::{Cart, CartTotals};
use crate::config::CartConfig;
use crate::error::CartResult;

#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::from_cart(Cart::new())
    }

    /// Creates an empty cart state with the given limits.
    ///
    /// Fails with [`CartError::InvalidConfig`](crate::CartError::InvalidConfig)
    /// when `config` does not validate.
    pub fn with_config(config: CartConfig) -> CartResult<Self> {
        Cart::with_config(config).map(Self::from_cart)
    }

    pub fn from_cart(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use tally_cart::CartState;
    /// use tally_core::{Item, Money};
    ///
    /// let state = CartState::new();
    /// let apple = Item::new("apple", Money::from_cents(99))?;
    /// state.with_cart_mut(|cart| cart.add_item(apple))?;
    /// assert_eq!(state.with_cart(|cart| cart.len()), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.lock())
    }

    /// Returns a copy of the cart's current contents.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }

    pub fn totals(&self) -> CartTotals {
        self.with_cart(|c| CartTotals::from(c))
    }

    /// Every cart operation leaves the `Vec` valid even if a caller's
    /// closure panics, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
