//! Core types for the Sakura cart.
//!
//! This module provides the value types shared by the cart, storage and view
//! layers.

pub mod line_item;
pub mod price;

pub use line_item::LineItem;
pub use price::Price;
