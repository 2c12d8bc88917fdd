//! # Cart Errors

use tally_core::{CoreError, ItemId};
use thiserror::Error;

/// Result type alias for cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Everything that can go wrong in tally-cart.
#[derive(Debug, Error)]
pub enum CartError {
    // =========================================================================
    // Cart Operations
    // =========================================================================
    /// Removal asked for an id that has no entry in the cart.
    #[error("Item {0} not in cart")]
    ItemNotInCart(ItemId),

    /// The cart already holds the configured maximum number of entries.
    #[error("Cart cannot have more than {max} items")]
    CartFull { max: usize },

    /// Domain error from tally-core (validation, parsing).
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration
    // =========================================================================
    /// Configuration values are inconsistent.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `CartConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl From<tally_core::ValidationError> for CartError {
    fn from(err: tally_core::ValidationError) -> Self {
        CartError::Core(CoreError::Validation(err))
    }
}
