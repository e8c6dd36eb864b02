//! End-to-end cart flows over the file backend.
//!
//! Each test gets its own temporary data directory.

#![allow(clippy::indexing_slicing)]

use sakura_core::{
    CART_KEY, CartStore, CheckoutOutcome, ClearOutcome, Decremented, KeyValueStore, Price,
    ScriptedPrompt, checkout::{checkout, clear_cart}, messages,
};
use sakura_storefront::storage::FileStore;
use tempfile::TempDir;

fn open(dir: &TempDir) -> CartStore<FileStore> {
    CartStore::open(FileStore::open(dir.path()).expect("Failed to open file store"))
}

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut store = open(&dir);
    store.add("Ролл А", Price::new(300), "x").expect("add");
    store.add("Ролл А", Price::new(300), "x").expect("add");
    store.add("Кола", Price::new(120), "0.5 л").expect("add");
    drop(store);

    let store = open(&dir);
    assert_eq!(store.item_count(), 3);
    assert_eq!(store.total(), Price::new(720));
    assert_eq!(store.cart().items()[0].quantity, 2);
}

#[test]
fn test_record_format_on_disk() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = open(&dir);
    store.add("Ролл А", Price::new(300), "x").expect("add");

    let raw = store
        .backend()
        .get(CART_KEY)
        .expect("read")
        .expect("record saved");
    let record: serde_json::Value = serde_json::from_str(&raw).expect("record is JSON");
    assert_eq!(
        record,
        serde_json::json!([
            { "name": "Ролл А", "price": 300, "description": "x", "quantity": 1 }
        ])
    );
}

#[test]
fn test_corrupt_record_loads_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(format!("{CART_KEY}.json")), "{not json")
        .expect("write corrupt record");

    let mut store = open(&dir);
    assert!(store.cart().is_empty());

    // The next mutation overwrites the bad record.
    store.add("Кола", Price::new(120), "").expect("add");
    assert_eq!(open(&dir).item_count(), 1);
}

#[test]
fn test_decrement_to_zero_removes_and_persists() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = open(&dir);
    store.add("Ролл А", Price::new(300), "x").expect("add");

    assert_eq!(
        store.decrement("Ролл А").expect("decrement"),
        Decremented::Removed
    );
    assert!(open(&dir).cart().is_empty());
}

#[test]
fn test_checkout_then_clear() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = open(&dir);
    store.add("Ролл А", Price::new(300), "x").expect("add");
    store.add("Ролл А", Price::new(300), "x").expect("add");

    let mut prompt = ScriptedPrompt::default();
    let outcome = checkout(&mut store, &mut prompt).expect("checkout");

    let CheckoutOutcome::Placed(summary) = outcome else {
        panic!("expected an order, got {outcome:?}");
    };
    assert_eq!(summary.total, Price::new(600));
    assert_eq!(summary.details(), "Ролл А – 2 × 300 ₽ = 600 ₽");

    let alert = prompt.alerts().next().expect("summary alert");
    assert!(alert.contains("Ролл А – 2 × 300 ₽ = 600 ₽"));
    assert!(alert.contains("600 ₽"));
    assert!(open(&dir).cart().is_empty());

    // Nothing left to clear.
    let outcome = clear_cart(&mut store, &mut prompt).expect("clear");
    assert_eq!(outcome, ClearOutcome::AlreadyEmpty);
    assert_eq!(prompt.alerts().last(), Some(messages::CART_ALREADY_EMPTY));
}

#[test]
fn test_declined_clear_keeps_saved_cart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = open(&dir);
    store.add("Кола", Price::new(120), "").expect("add");

    let mut prompt = ScriptedPrompt::answering([false]);
    assert_eq!(
        clear_cart(&mut store, &mut prompt).expect("clear"),
        ClearOutcome::Declined
    );
    assert_eq!(open(&dir).item_count(), 1);

    let mut prompt = ScriptedPrompt::answering([true]);
    assert_eq!(
        clear_cart(&mut store, &mut prompt).expect("clear"),
        ClearOutcome::Cleared
    );
    assert_eq!(prompt.notifications().collect::<Vec<_>>(), [messages::CART_CLEARED]);
    assert!(open(&dir).cart().is_empty());
}
