//! The in-memory cart.
//!
//! [`Cart`] is an ordered list of [`LineItem`]s keyed by name. Insertion order
//! is display order. Every operation either succeeds completely or leaves the
//! cart untouched.

use crate::error::CartError;
use crate::types::{LineItem, Price};

/// Ordered collection of line items for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// What happened to an item after a quantity decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decremented {
    /// The item is still in the cart with this quantity.
    Remaining(u32),
    /// The quantity reached zero and the item was removed.
    Removed,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from already-validated items.
    ///
    /// Returns `None` if any item has a zero quantity or a name appears twice.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Option<Self> {
        let valid = items.iter().enumerate().all(|(i, item)| {
            item.quantity >= 1 && !items.iter().take(i).any(|other| other.name == item.name)
        });
        valid.then_some(Self { items })
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry with the same name, or appends a new
    /// entry with quantity 1. Returns the resulting quantity.
    pub fn add(&mut self, name: &str, price: Price, description: &str) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(LineItem::new(name, price, description));
        1
    }

    /// Increase the quantity of the named item by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no item has this name.
    pub fn increment(&mut self, name: &str) -> Result<u32, CartError> {
        let index = self.position_of(name)?;
        self.increment_at(index)
    }

    /// Decrease the quantity of the named item by one, removing it at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no item has this name.
    pub fn decrement(&mut self, name: &str) -> Result<Decremented, CartError> {
        let index = self.position_of(name)?;
        self.decrement_at(index)
    }

    /// Remove the named item regardless of quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if no item has this name.
    pub fn remove(&mut self, name: &str) -> Result<LineItem, CartError> {
        let index = self.position_of(name)?;
        self.remove_at(index)
    }

    /// Increase the quantity of the item at `index` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidIndex`] if `index` is out of bounds.
    pub fn increment_at(&mut self, index: usize) -> Result<u32, CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::InvalidIndex { index, len })?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(item.quantity)
    }

    /// Decrease the quantity of the item at `index` by one.
    ///
    /// An item at quantity 1 is removed, shifting later items down.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidIndex`] if `index` is out of bounds.
    pub fn decrement_at(&mut self, index: usize) -> Result<Decremented, CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::InvalidIndex { index, len })?;
        if item.quantity > 1 {
            item.quantity -= 1;
            return Ok(Decremented::Remaining(item.quantity));
        }
        self.items.remove(index);
        Ok(Decremented::Removed)
    }

    /// Remove the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidIndex`] if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<LineItem, CartError> {
        if index >= self.items.len() {
            return Err(CartError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity over all items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities, shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up an item by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_of(&self, name: &str) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| CartError::UnknownItem(name.to_owned()))
    }
}
