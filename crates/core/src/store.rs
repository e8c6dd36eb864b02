//! Cart store: the cart plus its persisted mirror.
//!
//! [`CartStore`] is the only owner of the session's [`Cart`]. Every successful
//! mutation is followed by a full save of the record. A rejected operation
//! neither mutates nor saves.

use tracing::instrument;

use crate::cart::{Cart, Decremented};
use crate::error::Result;
use crate::storage::{CartStorage, KeyValueStore};
use crate::types::{LineItem, Price};

/// The session cart and the storage it is mirrored to.
#[derive(Debug)]
pub struct CartStore<K> {
    cart: Cart,
    storage: CartStorage<K>,
}

impl<K: KeyValueStore> CartStore<K> {
    /// Open a store, restoring the cart from `backend`.
    pub fn open(backend: K) -> Self {
        let storage = CartStorage::new(backend);
        let cart = storage.load();
        Self { cart, storage }
    }

    /// Current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub const fn backend(&self) -> &K {
        self.storage.backend()
    }

    /// Add one unit of a product. Returns the resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    #[instrument(skip(self, description))]
    pub fn add(&mut self, name: &str, price: Price, description: &str) -> Result<u32> {
        let quantity = self.cart.add(name, price, description);
        self.persist()?;
        Ok(quantity)
    }

    /// Increase the named item's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn increment(&mut self, name: &str) -> Result<u32> {
        let quantity = self.cart.increment(name)?;
        self.persist()?;
        Ok(quantity)
    }

    /// Decrease the named item's quantity by one, removing it at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, name: &str) -> Result<Decremented> {
        let outcome = self.cart.decrement(name)?;
        self.persist()?;
        Ok(outcome)
    }

    /// Remove the named item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<LineItem> {
        let item = self.cart.remove(name)?;
        self.persist()?;
        Ok(item)
    }

    /// Increase the quantity of the item at `index` by one.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or the cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn increment_at(&mut self, index: usize) -> Result<u32> {
        let quantity = self.cart.increment_at(index)?;
        self.persist()?;
        Ok(quantity)
    }

    /// Decrease the quantity of the item at `index` by one.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or the cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn decrement_at(&mut self, index: usize) -> Result<Decremented> {
        let outcome = self.cart.decrement_at(index)?;
        self.persist()?;
        Ok(outcome)
    }

    /// Remove the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or the cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn remove_at(&mut self, index: usize) -> Result<LineItem> {
        let item = self.cart.remove_at(index)?;
        self.persist()?;
        Ok(item)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.persist()
    }

    /// Sum of unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.cart).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist cart");
            e.into()
        })
    }
}
