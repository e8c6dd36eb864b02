//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every handler holds the cart lock for its whole mutate, persist and render
//! sequence.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use sakura_core::{BadgeView, CartView, Product, checkout as flows, messages};
use serde::Deserialize;
use tracing::instrument;

use super::{NoticeView, notice_views};
use crate::error::Result;
use crate::prompt::FormPrompt;
use crate::state::AppState;

/// HTMX event that refreshes every cart badge on the page.
pub const CART_UPDATED: &str = "cart-updated";

/// Add to cart form data: the text of a product card.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
}

/// Form naming a cart item.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: String,
}

/// Clear cart form data.
///
/// `confirmed` is set by the page after the user accepted the browser dialog.
#[derive(Debug, Default, Deserialize)]
pub struct ClearCartForm {
    #[serde(default)]
    pub confirmed: bool,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub badge: BadgeView,
    pub cart: CartView,
    pub notices: Vec<NoticeView>,
    pub notice_ms: u64,
    pub confirm_clear: &'static str,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub notices: Vec<NoticeView>,
    pub notice_ms: u64,
    pub confirm_clear: &'static str,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub badge: BadgeView,
}

/// Notices fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notices.html")]
pub struct NoticesTemplate {
    pub notices: Vec<NoticeView>,
    pub notice_ms: u64,
}

impl CartItemsTemplate {
    fn new(state: &AppState, cart: CartView, notices: Vec<NoticeView>) -> Self {
        Self {
            cart,
            notices,
            notice_ms: state.config().notification_ms,
            confirm_clear: messages::CONFIRM_CLEAR,
        }
    }
}

/// Render the items fragment and tell the page to refresh its badges.
fn updated(template: CartItemsTemplate) -> Response {
    (AppendHeaders([("HX-Trigger", CART_UPDATED)]), template).into_response()
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = CartView::project(state.cart().await.cart());

    CartShowTemplate {
        badge: cart.badge,
        cart,
        notices: Vec::new(),
        notice_ms: state.config().notification_ms,
        confirm_clear: messages::CONFIRM_CLEAR,
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.cart().await.item_count();
    CartCountTemplate {
        badge: BadgeView::new(count),
    }
}

/// Add a product card to the cart (HTMX).
///
/// Returns the "added" notification and an HTMX trigger to update the cart
/// count badges.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = Product::from_card(&form.name, &form.price, &form.description)?;

    let quantity = state
        .cart()
        .await
        .add(&product.name, product.price, &product.description)?;
    tracing::info!(product = %product.name, quantity, "Added to cart");

    let notices = vec![NoticeView {
        message: messages::added_to_cart(&product.name),
        is_alert: false,
    }];
    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        NoticesTemplate {
            notices,
            notice_ms: state.config().notification_ms,
        },
    )
        .into_response())
}

/// Increase an item's quantity (HTMX).
#[instrument(skip(state))]
pub async fn increment(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let mut store = state.cart().await;
    store.increment(&form.name)?;
    let cart = CartView::project(store.cart());
    drop(store);

    Ok(updated(CartItemsTemplate::new(&state, cart, Vec::new())))
}

/// Decrease an item's quantity, removing it at zero (HTMX).
#[instrument(skip(state))]
pub async fn decrement(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let mut store = state.cart().await;
    let outcome = store.decrement(&form.name)?;
    tracing::debug!(?outcome, "Decremented");
    let cart = CartView::project(store.cart());
    drop(store);

    Ok(updated(CartItemsTemplate::new(&state, cart, Vec::new())))
}

/// Remove an item from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    let mut store = state.cart().await;
    store.remove(&form.name)?;
    let cart = CartView::project(store.cart());
    drop(store);

    Ok(updated(CartItemsTemplate::new(&state, cart, Vec::new())))
}

/// Clear the cart if the user confirmed (HTMX).
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Form(form): Form<ClearCartForm>,
) -> Result<Response> {
    let mut prompt = FormPrompt::new(form.confirmed);

    let mut store = state.cart().await;
    let outcome = flows::clear_cart(&mut *store, &mut prompt)?;
    let cart = CartView::project(store.cart());
    drop(store);

    tracing::info!(?outcome, "Clear cart");
    let notices = notice_views(prompt.into_notices());
    Ok(updated(CartItemsTemplate::new(&state, cart, notices)))
}

/// Place the order (HTMX).
///
/// Shows the order summary as an alert and empties the cart. There is no
/// order submission.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response> {
    let mut prompt = FormPrompt::default();

    let mut store = state.cart().await;
    let outcome = flows::checkout(&mut *store, &mut prompt)?;
    let cart = CartView::project(store.cart());
    drop(store);

    tracing::debug!(?outcome, "Checkout finished");
    let notices = notice_views(prompt.into_notices());
    Ok(updated(CartItemsTemplate::new(&state, cart, notices)))
}
