//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog page (?category=<slug|label>)
//! GET  /auth                   - Auth placeholder (notices fragment)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add product card (returns notices, triggers cart-updated)
//! POST /cart/increment         - One more of an item (returns cart_items fragment)
//! POST /cart/decrement         - One less of an item (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Clear after confirmation (returns cart_items fragment)
//! POST /cart/checkout          - Place order (returns cart_items fragment)
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{get, post},
};
use sakura_core::Notice;

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/auth", get(auth::placeholder))
        .nest("/cart", cart_routes())
}

/// Notice display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub message: String,
    /// Alerts stay until dismissed; notifications fade out on a timer.
    pub is_alert: bool,
}

/// Convert prompt output into displayable notices.
///
/// Confirmations were answered before the request and are not shown.
#[must_use]
pub fn notice_views(notices: Vec<Notice>) -> Vec<NoticeView> {
    notices
        .into_iter()
        .filter_map(|notice| match notice {
            Notice::Alert(message) => Some(NoticeView {
                message,
                is_alert: true,
            }),
            Notice::Notification(message) => Some(NoticeView {
                message,
                is_alert: false,
            }),
            Notice::Confirm { .. } => None,
        })
        .collect()
}
