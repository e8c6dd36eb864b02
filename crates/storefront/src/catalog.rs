//! Restaurant menu.
//!
//! The menu is the list of product cards shown on the catalog page. A built-in
//! menu ships with the binary; `SAKURA_MENU_PATH` points at a JSON file with
//! the same shape to replace it.

use std::path::Path;

use sakura_core::{Category, Product};
use thiserror::Error;

const BUILTIN_MENU: &str = include_str!("../menu.json");

/// Errors loading a menu file.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu lists {0:?} more than once")]
    DuplicateProduct(String),
}

/// The products on offer, in display order.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    products: Vec<Product>,
}

impl Menu {
    /// Load the menu from `path`, or the built-in menu when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid menu.
    pub fn load(path: Option<&Path>) -> Result<Self, MenuError> {
        let menu = match path {
            Some(path) => Self::parse(&std::fs::read_to_string(path)?)?,
            None => Self::builtin()?,
        };
        tracing::info!(products = menu.products.len(), "Menu loaded");
        Ok(menu)
    }

    /// The menu bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled menu is invalid.
    pub fn builtin() -> Result<Self, MenuError> {
        Self::parse(BUILTIN_MENU)
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate product names.
    pub fn parse(json: &str) -> Result<Self, MenuError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        for (i, product) in products.iter().enumerate() {
            if products.iter().take(i).any(|p| p.name == product.name) {
                return Err(MenuError::DuplicateProduct(product.name.clone()));
            }
        }
        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Products shown under `category`.
    pub fn visible_in(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.is_in(category))
    }
}
