//! Products as shown on menu cards.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ProductError;
use crate::types::Price;

/// A menu product: the three text fields of a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Read a product from the text of a product card.
    ///
    /// Surrounding whitespace is trimmed. The price is taken from the leading
    /// digits of `price_text`, so `"450 ₽"` reads as 450.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is blank or the price text does not start
    /// with a digit.
    pub fn from_card(
        title: &str,
        price_text: &str,
        description: &str,
    ) -> Result<Self, ProductError> {
        let name = title.trim();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }

        Ok(Self {
            name: name.to_owned(),
            price: parse_price(price_text)?,
            description: description.trim().to_owned(),
        })
    }

    /// Whether the product is shown under `category`.
    #[must_use]
    pub fn is_in(&self, category: Category) -> bool {
        category.matches(&self.name, &self.description)
    }
}

/// Parse the leading integer of a price label.
///
/// # Errors
///
/// Returns [`ProductError::InvalidPrice`] when there are no leading digits or
/// the number does not fit.
pub fn parse_price(text: &str) -> Result<Price, ProductError> {
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed
        .get(..digits_end)
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse::<u64>().ok())
        .map(Price::new)
        .ok_or_else(|| ProductError::InvalidPrice(text.to_owned()))
}
