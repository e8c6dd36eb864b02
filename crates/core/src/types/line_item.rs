//! A single cart entry.

use serde::{Deserialize, Serialize};

use super::Price;

/// One product entry in the cart with its quantity.
///
/// The `name` is the item's key: a cart never holds two entries with the same
/// name. `quantity` is always at least 1 while the item is in a cart.
///
/// Field names match the persisted record (`name`, `price`, `description`,
/// `quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, unique within a cart.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Product description shown under the name.
    pub description: String,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with a quantity of one.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
