//! Integration tests for Sakura.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sakura-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store, checkout and clear against the file backend
//! - `storefront_routes` - HTTP routes driven in-process through the router
//!
//! The storefront is exercised without binding a socket: [`TestApp`] sends
//! requests straight into the axum router.

#![allow(clippy::missing_panics_doc)]

use std::path::Path;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use sakura_core::{CART_KEY, CartStore};
use sakura_storefront::{
    app, catalog::Menu, config::StorefrontConfig, state::AppState, storage::FileStore,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// A response collected into memory.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of the `HX-Trigger` header, if any.
    #[must_use]
    pub fn hx_trigger(&self) -> Option<&str> {
        self.headers.get("HX-Trigger").and_then(|v| v.to_str().ok())
    }
}

/// Storefront router over a temporary data directory and the built-in menu.
pub struct TestApp {
    dir: TempDir,
    state: AppState,
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let state = Self::state_in(dir.path());
        Self { dir, state }
    }

    /// Simulate a page reload: rebuild the state from what is on disk.
    #[must_use]
    pub fn reloaded(self) -> Self {
        let state = Self::state_in(self.dir.path());
        Self {
            dir: self.dir,
            state,
        }
    }

    fn state_in(dir: &Path) -> AppState {
        let config = StorefrontConfig {
            data_dir: dir.to_path_buf(),
            ..StorefrontConfig::default()
        };
        let menu = Menu::builtin().expect("Built-in menu must parse");
        let store = FileStore::open(dir).expect("Failed to open file store");
        AppState::with_parts(config, menu, CartStore::open(store))
    }

    fn router(&self) -> Router {
        app(self.state.clone())
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// POST form fields, encoded as `application/x-www-form-urlencoded`.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("Router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
        }
    }

    /// The saved cart record, parsed.
    #[must_use]
    pub fn saved_record(&self) -> Option<serde_json::Value> {
        let path = self.dir.path().join(format!("{CART_KEY}.json"));
        let text = std::fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&text).expect("Saved record is not JSON"))
    }

    /// Items currently in the cart, summed over quantities.
    pub async fn item_count(&self) -> u32 {
        self.state.cart().await.item_count()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
