//! Catalog page with category filter buttons.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use sakura_core::{BadgeView, Category, category};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Category slug or button label; all products when absent.
    pub category: Option<String>,
}

/// Category button display data.
#[derive(Clone)]
pub struct CategoryButton {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Product card display data.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    pub description: String,
    pub price: String,
    pub visible: bool,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub badge: BadgeView,
    pub categories: Vec<CategoryButton>,
    pub products: Vec<ProductCardView>,
}

/// Display the catalog, hiding products outside the selected category.
///
/// An unknown category highlights no button and hides every product.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let selected = query.category.as_deref().unwrap_or(Category::All.slug());
    let active = Category::parse(selected).ok();
    if active.is_none() {
        tracing::debug!(category = selected, "Unknown category requested");
    }

    let categories = Category::ALL
        .into_iter()
        .map(|c| CategoryButton {
            slug: c.slug(),
            label: c.label(),
            active: active == Some(c),
        })
        .collect();

    let products = state
        .menu()
        .products()
        .iter()
        .map(|p| ProductCardView {
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price.to_string(),
            visible: category::matches(selected, &p.name, &p.description),
        })
        .collect();

    let badge = BadgeView::new(state.cart().await.item_count());

    CatalogTemplate {
        badge,
        categories,
        products,
    }
}
