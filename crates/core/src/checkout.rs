//! Checkout and clear-cart flows.
//!
//! Both flows read the [`CartStore`], talk to the user through a
//! [`UserPrompt`] and end with the cart cleared and persisted, or untouched.
//! An empty cart is an informational outcome, not an error.

use core::fmt;

use tracing::instrument;

use crate::error::Result;
use crate::messages;
use crate::prompt::UserPrompt;
use crate::storage::KeyValueStore;
use crate::store::CartStore;
use crate::types::{LineItem, Price};

/// Checkout state machine.
///
/// `Idle -> Confirmed -> Idle`; a checkout on an empty cart stays `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    /// The summary was acknowledged; the cart is about to be cleared.
    Confirmed,
}

/// One line of the order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub price: Price,
    pub subtotal: Price,
}

impl From<&LineItem> for SummaryLine {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            subtotal: item.line_total(),
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {} × {} = {}",
            self.name, self.quantity, self.price, self.subtotal
        )
    }
}

/// What the user ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

impl OrderSummary {
    /// Summary lines joined by newlines.
    #[must_use]
    pub fn details(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of [`checkout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to order; the cart was not touched.
    CartEmpty,
    /// The order was acknowledged and the cart cleared.
    Placed(OrderSummary),
}

/// Result of [`clear_cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    /// The user declined; the cart was not touched.
    Declined,
    Cleared,
}

/// Check out the cart.
///
/// Shows the order summary and total, then clears and persists the cart. An
/// empty cart only shows an alert and persists nothing.
///
/// The flow moves [`CheckoutState::Idle`] to [`CheckoutState::Confirmed`] once
/// the summary is shown and back to `Idle` after the cart is cleared; each
/// transition is logged with a `state` field.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be persisted.
#[instrument(skip_all)]
pub fn checkout<K, P>(store: &mut CartStore<K>, prompt: &mut P) -> Result<CheckoutOutcome>
where
    K: KeyValueStore,
    P: UserPrompt + ?Sized,
{
    if store.cart().is_empty() {
        prompt.alert(messages::CART_EMPTY);
        return Ok(CheckoutOutcome::CartEmpty);
    }

    let summary = OrderSummary {
        lines: store.cart().items().iter().map(SummaryLine::from).collect(),
        total: store.total(),
    };
    prompt.alert(&messages::order_placed(
        &summary.details(),
        &summary.total.to_string(),
    ));
    tracing::debug!(state = ?CheckoutState::Confirmed, "Order summary shown");

    store.clear()?;
    tracing::info!(
        state = ?CheckoutState::Idle,
        lines = summary.lines.len(),
        total = summary.total.rubles(),
        "Order placed"
    );
    Ok(CheckoutOutcome::Placed(summary))
}

/// Clear the cart after asking the user.
///
/// # Errors
///
/// Returns an error if the cleared cart cannot be persisted.
#[instrument(skip_all)]
pub fn clear_cart<K, P>(store: &mut CartStore<K>, prompt: &mut P) -> Result<ClearOutcome>
where
    K: KeyValueStore,
    P: UserPrompt + ?Sized,
{
    if store.cart().is_empty() {
        prompt.alert(messages::CART_ALREADY_EMPTY);
        return Ok(ClearOutcome::AlreadyEmpty);
    }

    if !prompt.confirm(messages::CONFIRM_CLEAR) {
        tracing::debug!("Clear declined");
        return Ok(ClearOutcome::Declined);
    }

    store.clear()?;
    prompt.notify(messages::CART_CLEARED);
    Ok(ClearOutcome::Cleared)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::prompt::{Notice, ScriptedPrompt};
    use crate::storage::MemoryStore;

    fn store_with_rolls() -> CartStore<MemoryStore> {
        let mut store = CartStore::open(MemoryStore::new());
        store.add("Ролл А", Price::new(300), "").unwrap();
        store.add("Ролл А", Price::new(300), "").unwrap();
        store.add("Кола", Price::new(120), "0.5 л").unwrap();
        store
    }

    #[test]
    fn test_checkout_empty_cart_persists_nothing() {
        let mut store = CartStore::open(MemoryStore::new());
        let mut prompt = ScriptedPrompt::default();

        let outcome = checkout(&mut store, &mut prompt).unwrap();

        assert_eq!(outcome, CheckoutOutcome::CartEmpty);
        assert_eq!(prompt.alerts().collect::<Vec<_>>(), [messages::CART_EMPTY]);
        assert!(store.cart().is_empty());
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn test_checkout_summarizes_and_clears() {
        let mut store = store_with_rolls();
        let writes_before = store.backend().writes();
        let mut prompt = ScriptedPrompt::default();

        let CheckoutOutcome::Placed(summary) = checkout(&mut store, &mut prompt).unwrap() else {
            panic!("expected a placed order");
        };

        assert_eq!(summary.total, Price::new(720));
        assert_eq!(summary.lines[0].to_string(), "Ролл А – 2 × 300 ₽ = 600 ₽");
        assert_eq!(summary.lines[1].to_string(), "Кола – 1 × 120 ₽ = 120 ₽");

        let alert = prompt.alerts().next().unwrap();
        assert!(alert.contains("Ролл А – 2 × 300 ₽ = 600 ₽"));
        assert!(alert.contains("720 ₽"));

        assert!(store.cart().is_empty());
        assert_eq!(store.backend().writes(), writes_before + 1);
    }

    #[test]
    fn test_checkout_state_starts_idle() {
        assert_eq!(CheckoutState::default(), CheckoutState::Idle);
    }

    #[test]
    fn test_checkout_never_asks_for_confirmation() {
        let mut store = store_with_rolls();
        let mut prompt = ScriptedPrompt::answering([false]);
        checkout(&mut store, &mut prompt).unwrap();
        assert!(
            !prompt
                .log()
                .iter()
                .any(|n| matches!(n, Notice::Confirm { .. }))
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_clear_empty_cart() {
        let mut store = CartStore::open(MemoryStore::new());
        let mut prompt = ScriptedPrompt::answering([true]);

        assert_eq!(
            clear_cart(&mut store, &mut prompt).unwrap(),
            ClearOutcome::AlreadyEmpty
        );
        assert_eq!(
            prompt.log(),
            [Notice::Alert(messages::CART_ALREADY_EMPTY.to_owned())]
        );
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn test_clear_declined_leaves_cart() {
        let mut store = store_with_rolls();
        let before = store.cart().clone();
        let writes_before = store.backend().writes();
        let mut prompt = ScriptedPrompt::answering([false]);

        assert_eq!(
            clear_cart(&mut store, &mut prompt).unwrap(),
            ClearOutcome::Declined
        );
        assert_eq!(store.cart(), &before);
        assert_eq!(store.backend().writes(), writes_before);
    }

    #[test]
    fn test_clear_accepted_empties_and_persists() {
        let mut store = store_with_rolls();
        let writes_before = store.backend().writes();
        let mut prompt = ScriptedPrompt::answering([true]);

        assert_eq!(
            clear_cart(&mut store, &mut prompt).unwrap(),
            ClearOutcome::Cleared
        );
        assert!(store.cart().is_empty());
        assert_eq!(store.backend().writes(), writes_before + 1);
        assert_eq!(
            prompt.notifications().collect::<Vec<_>>(),
            [messages::CART_CLEARED]
        );

        let reopened = CartStore::open(store.backend().clone());
        assert!(reopened.cart().is_empty());
    }
}
