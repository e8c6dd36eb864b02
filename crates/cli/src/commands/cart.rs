//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! sakura-cli add "Филадельфия ролл"
//! sakura-cli inc "Филадельфия ролл"
//! sakura-cli dec '#1'            # by position, starting at 1
//! sakura-cli clear --yes
//! sakura-cli checkout
//! ```

use core::fmt;
use core::str::FromStr;
use std::io::{self, Write};

use sakura_core::{
    CartStore, CartView, CheckoutOutcome, ClearOutcome, Decremented, KeyValueStore, LineItem,
    StoreError, UserPrompt, checkout as flows, messages,
};
use sakura_storefront::catalog::Menu;
use thiserror::Error;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The cart rejected the operation or could not be saved.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Writing to the terminal failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    /// The product is not on the menu.
    #[error("Unknown product: {0}. Run `sakura-cli menu` to list products")]
    UnknownProduct(String),
}

/// How a command addresses a cart item: by name or by `#N` position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Name(String),
    /// Zero-based index.
    Position(usize),
}

impl FromStr for ItemRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(position) = s.strip_prefix('#') else {
            return Ok(Self::Name(s.to_owned()));
        };
        match position.parse::<usize>() {
            Ok(0) => Err("positions start at #1".to_owned()),
            Ok(n) => Ok(Self::Position(n - 1)),
            Err(_) => Err(format!("invalid position {s:?}")),
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Position(index) => write!(f, "#{}", index + 1),
        }
    }
}

/// Print the cart.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show<K: KeyValueStore>(store: &CartStore<K>, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", CartView::project(store.cart()))
}

/// Add one of a menu product to the cart.
///
/// # Errors
///
/// Returns an error if the product is not on the menu or the cart cannot be
/// saved.
pub fn add<K, P>(
    store: &mut CartStore<K>,
    menu: &Menu,
    name: &str,
    prompt: &mut P,
) -> Result<u32, CartCommandError>
where
    K: KeyValueStore,
    P: UserPrompt + ?Sized,
{
    let product = menu
        .find(name)
        .ok_or_else(|| CartCommandError::UnknownProduct(name.to_owned()))?;

    let quantity = store.add(&product.name, product.price, &product.description)?;
    prompt.notify(&messages::added_to_cart(&product.name));
    Ok(quantity)
}

/// One more of an item.
///
/// # Errors
///
/// Returns an error if the item is not in the cart or the cart cannot be saved.
pub fn increment<K: KeyValueStore>(
    store: &mut CartStore<K>,
    item: &ItemRef,
) -> Result<u32, StoreError> {
    match item {
        ItemRef::Name(name) => store.increment(name),
        ItemRef::Position(index) => store.increment_at(*index),
    }
}

/// One less of an item, removing it at zero.
///
/// # Errors
///
/// Returns an error if the item is not in the cart or the cart cannot be saved.
pub fn decrement<K: KeyValueStore>(
    store: &mut CartStore<K>,
    item: &ItemRef,
) -> Result<Decremented, StoreError> {
    match item {
        ItemRef::Name(name) => store.decrement(name),
        ItemRef::Position(index) => store.decrement_at(*index),
    }
}

/// Remove an item entirely.
///
/// # Errors
///
/// Returns an error if the item is not in the cart or the cart cannot be saved.
pub fn remove<K: KeyValueStore>(
    store: &mut CartStore<K>,
    item: &ItemRef,
) -> Result<LineItem, StoreError> {
    match item {
        ItemRef::Name(name) => store.remove(name),
        ItemRef::Position(index) => store.remove_at(*index),
    }
}

/// Clear the cart after confirmation.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be saved.
pub fn clear<K, P>(store: &mut CartStore<K>, prompt: &mut P) -> Result<ClearOutcome, StoreError>
where
    K: KeyValueStore,
    P: UserPrompt + ?Sized,
{
    flows::clear_cart(store, prompt)
}

/// Place the order.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be saved.
pub fn checkout<K, P>(
    store: &mut CartStore<K>,
    prompt: &mut P,
) -> Result<CheckoutOutcome, StoreError>
where
    K: KeyValueStore,
    P: UserPrompt + ?Sized,
{
    flows::checkout(store, prompt)
}
