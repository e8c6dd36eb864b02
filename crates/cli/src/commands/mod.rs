//! CLI command implementations.
//!
//! Commands work against any [`KeyValueStore`](sakura_core::KeyValueStore)
//! and [`UserPrompt`](sakura_core::UserPrompt) so they can be driven from
//! tests with in-memory doubles.

pub mod cart;
pub mod menu;
