//! Persisted cart record.
//!
//! The cart is stored as a single JSON array under the [`CART_KEY`] key of a
//! [`KeyValueStore`]. The record has no version field: anything that does not
//! decode into a valid cart is treated as if no record existed.

use std::collections::HashMap;

use thiserror::Error;

use crate::cart::Cart;
use crate::error::StorageError;
use crate::types::LineItem;

/// Key under which the cart record is stored.
pub const CART_KEY: &str = "sakuraCart";

/// A durable string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
///
/// Counts writes so callers can check whether an operation persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Why a stored record was discarded.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Not a JSON array of line items.
    #[error("malformed cart record: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Decoded, but breaks a cart invariant (zero quantity or duplicate name).
    #[error("cart record violates item invariants")]
    Invalid,
}

/// Decode a persisted record into a cart.
///
/// # Errors
///
/// Returns [`RecordError`] if the record is not a valid cart.
pub fn decode_record(record: &str) -> Result<Cart, RecordError> {
    let items: Vec<LineItem> = serde_json::from_str(record)?;
    Cart::from_items(items).ok_or(RecordError::Invalid)
}

/// Encode a cart as a persisted record.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_record(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart.items())
}

/// Reads and writes the cart record through a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct CartStorage<K> {
    backend: K,
}

impl<K: KeyValueStore> CartStorage<K> {
    /// Wrap a key-value backend.
    pub const fn new(backend: K) -> Self {
        Self { backend }
    }

    /// Load the persisted cart.
    ///
    /// Never fails: a missing, unreadable or malformed record yields an empty
    /// cart.
    pub fn load(&self) -> Cart {
        let record = match self.backend.get(CART_KEY) {
            Ok(Some(record)) => record,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart record, starting empty");
                return Cart::new();
            }
        };

        match decode_record(&record) {
            Ok(cart) => {
                tracing::debug!(items = cart.len(), "Cart restored");
                cart
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding cart record");
                Cart::new()
            }
        }
    }

    /// Persist the full cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or written.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let record = encode_record(cart)?;
        self.backend.set(CART_KEY, &record)
    }

    /// Get a reference to the backend.
    pub const fn backend(&self) -> &K {
        &self.backend
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    #[test]
    fn test_load_without_record_is_empty() {
        let storage = CartStorage::new(MemoryStore::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let mut cart = Cart::new();
        cart.add("Калифорния", Price::new(390), "краб, авокадо");
        cart.add("Чай", Price::new(90), "зеленый");
        cart.add("Калифорния", Price::new(390), "краб, авокадо");

        let mut storage = CartStorage::new(MemoryStore::new());
        storage.save(&cart).unwrap();

        assert_eq!(storage.load(), cart);
        assert_eq!(storage.backend().writes(), 1);
    }

    #[test]
    fn test_record_field_names() {
        let mut cart = Cart::new();
        cart.add("Кола", Price::new(120), "0.5 л");

        let record = encode_record(&cart).unwrap();
        assert_eq!(
            record,
            r#"[{"name":"Кола","price":120,"description":"0.5 л","quantity":1}]"#
        );
    }

    #[test]
    fn test_malformed_record_loads_empty() {
        for record in [
            "not json",
            "{}",
            r#"[{"name":"Кола"}]"#,
            r#"[{"name":"Кола","price":-5,"description":"","quantity":1}]"#,
            r#"[{"name":"Кола","price":120,"description":"","quantity":0}]"#,
            r#"[{"name":"Кола","price":120,"description":"","quantity":1},
                {"name":"Кола","price":120,"description":"","quantity":2}]"#,
        ] {
            let storage = CartStorage::new(MemoryStore::with_value(CART_KEY, record));
            assert!(storage.load().is_empty(), "record {record:?} should be discarded");
        }
    }

    #[test]
    fn test_decode_reports_reason() {
        assert!(matches!(
            decode_record("[1, 2]"),
            Err(RecordError::Malformed(_))
        ));
        assert!(matches!(
            decode_record(r#"[{"name":"a","price":1,"description":"","quantity":0}]"#),
            Err(RecordError::Invalid)
        ));
    }
}
