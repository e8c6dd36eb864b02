//! Error types for cart operations and storage.

use thiserror::Error;

/// A cart operation targeted an item that is not in the cart.
///
/// Failed operations never mutate the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Position outside the current cart bounds.
    #[error("no cart item at position {index} (cart has {len} items)")]
    InvalidIndex {
        /// Requested position.
        index: usize,
        /// Number of items in the cart at the time of the call.
        len: usize,
    },
    /// No item with this name.
    #[error("no cart item named {0:?}")]
    UnknownItem(String),
}

/// The key-value backend failed to read or write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The cart could not be encoded.
    #[error("failed to encode cart record: {0}")]
    Encode(#[from] serde_json::Error),
    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors returned by [`CartStore`](crate::CartStore) mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation was rejected by the cart.
    #[error(transparent)]
    Cart(#[from] CartError),
    /// The mutation was applied in memory but could not be persisted.
    #[error("failed to persist cart: {0}")]
    Storage(#[from] StorageError),
}

/// A product card could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// The card has no title.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price text does not start with a number.
    #[error("invalid product price {0:?}")]
    InvalidPrice(String),
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
