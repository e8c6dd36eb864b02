//! Sakura Core - cart state for the Sakura sushi ordering site.
//!
//! This crate holds everything about the cart that does not touch a screen:
//! - the ordered list of line items and its invariants
//! - the persisted record and the key-value storage it lives in
//! - the category filter used by the menu buttons
//! - the view projection, checkout and clear-cart flows
//!
//! # Architecture
//!
//! The core crate performs no I/O of its own. Storage backends implement
//! [`KeyValueStore`] and user dialogs implement [`UserPrompt`]; the
//! `storefront` and `cli` crates provide the real ones.
//!
//! # Modules
//!
//! - [`types`] - Price and line item value types
//! - [`cart`] - The in-memory cart
//! - [`store`] - Cart plus persistence
//! - [`storage`] - Persisted record and key-value backends
//! - [`category`] - Menu category filter
//! - [`product`] - Product cards
//! - [`view`] - Display projection
//! - [`prompt`] - User dialogs
//! - [`checkout`] - Checkout and clear-cart flows

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod category;
pub mod checkout;
pub mod error;
pub mod messages;
pub mod product;
pub mod prompt;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

pub use cart::{Cart, Decremented};
pub use category::{Category, UnknownCategory};
pub use checkout::{CheckoutOutcome, CheckoutState, ClearOutcome, OrderSummary, SummaryLine};
pub use error::{CartError, ProductError, StorageError, StoreError};
pub use product::Product;
pub use prompt::{Notice, ScriptedPrompt, UserPrompt};
pub use storage::{CART_KEY, CartStorage, KeyValueStore, MemoryStore};
pub use store::CartStore;
pub use types::*;
pub use view::{BadgeView, CartBody, CartView, LineRow};
