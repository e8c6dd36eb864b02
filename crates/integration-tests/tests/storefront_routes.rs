//! Storefront routes driven in-process through the router.

use axum::http::StatusCode;
use sakura_core::messages;
use sakura_integration_tests::TestApp;

const ROLL: [(&str, &str); 3] = [
    ("name", "Филадельфия ролл"),
    ("price", "450 ₽"),
    ("description", "Лосось, сливочный сыр, огурец"),
];

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let resp = app.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_add_updates_badge_and_notifies() {
    let app = TestApp::new();

    let resp = app.post_form("/cart/add", &ROLL).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.hx_trigger(), Some("cart-updated"));
    assert!(resp.body.contains(&messages::added_to_cart("Филадельфия ролл")));

    app.post_form("/cart/add", &ROLL).await;

    let badge = app.get("/cart/count").await;
    assert!(badge.body.contains(">2</span>"));
    assert!(!badge.body.contains("hidden"));

    let record = app.saved_record().expect("cart saved");
    assert_eq!(record[0]["quantity"], 2);
    assert_eq!(record[0]["price"], 450);
}

#[tokio::test]
async fn test_empty_badge_is_hidden() {
    let app = TestApp::new();
    let badge = app.get("/cart/count").await;
    assert!(badge.body.contains("hidden"));
    assert!(badge.body.contains(">0</span>"));
}

#[tokio::test]
async fn test_add_rejects_bad_card() {
    let app = TestApp::new();
    let resp = app
        .post_form("/cart/add", &[("name", "Кола"), ("price", "бесплатно")])
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.item_count().await, 0);
}

#[tokio::test]
async fn test_cart_page_lists_items() {
    let app = TestApp::new();
    app.post_form("/cart/add", &ROLL).await;
    app.post_form("/cart/increment", &[("name", "Филадельфия ролл")])
        .await;

    let page = app.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Филадельфия ролл"));
    assert!(page.body.contains("900 ₽"));
    assert!(!page.body.contains("Ваша корзина пуста"));
}

#[tokio::test]
async fn test_decrement_to_zero_shows_empty_cart() {
    let app = TestApp::new();
    app.post_form("/cart/add", &ROLL).await;

    let resp = app
        .post_form("/cart/decrement", &[("name", "Филадельфия ролл")])
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.hx_trigger(), Some("cart-updated"));
    assert!(resp.body.contains("Ваша корзина пуста"));
    assert_eq!(app.item_count().await, 0);
}

#[tokio::test]
async fn test_unknown_item_is_not_found() {
    let app = TestApp::new();
    let resp = app.post_form("/cart/remove", &[("name", "Пицца")]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let app = TestApp::new();
    app.post_form("/cart/add", &ROLL).await;

    let resp = app.post_form("/cart/clear", &[("confirmed", "false")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(app.item_count().await, 1);

    let resp = app.post_form("/cart/clear", &[("confirmed", "true")]).await;
    assert!(resp.body.contains(messages::CART_CLEARED));
    assert!(resp.body.contains("Ваша корзина пуста"));
    assert_eq!(app.item_count().await, 0);
    assert_eq!(app.saved_record(), Some(serde_json::json!([])));
}

#[tokio::test]
async fn test_clear_empty_cart_alerts() {
    let app = TestApp::new();
    let resp = app.post_form("/cart/clear", &[("confirmed", "true")]).await;
    assert!(resp.body.contains(messages::CART_ALREADY_EMPTY));
    assert!(resp.body.contains("notice-alert"));
}

#[tokio::test]
async fn test_checkout_clears_cart() {
    let app = TestApp::new();
    app.post_form("/cart/add", &ROLL).await;
    app.post_form("/cart/add", &ROLL).await;

    let resp = app.post_form("/cart/checkout", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Заказ оформлен"));
    assert!(resp.body.contains("Филадельфия ролл – 2 × 450 ₽ = 900 ₽"));
    assert_eq!(app.item_count().await, 0);

    let resp = app.post_form("/cart/checkout", &[]).await;
    assert!(resp.body.contains(messages::CART_EMPTY));
}

#[tokio::test]
async fn test_cart_restored_after_reload() {
    let app = TestApp::new();
    app.post_form("/cart/add", &ROLL).await;

    let app = app.reloaded();
    assert_eq!(app.item_count().await, 1);
    let page = app.get("/cart").await;
    assert!(page.body.contains("Филадельфия ролл"));
}

#[tokio::test]
async fn test_catalog_filters_by_category() {
    let app = TestApp::new();

    let page = app.get("/?category=drinks").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("category-btn active\">Напитки"));

    let hidden = page.body.matches("class=\"product-card\" hidden").count();
    let shown = page.body.matches("class=\"product-card\">").count();
    assert_eq!(shown, 3);
    assert_eq!(hidden, 8);
}

#[tokio::test]
async fn test_catalog_unknown_category_hides_everything() {
    let app = TestApp::new();
    let page = app.get("/?category=desserts").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains("category-btn active"));
    assert_eq!(page.body.matches("class=\"product-card\">").count(), 0);
}

#[tokio::test]
async fn test_auth_placeholder() {
    let app = TestApp::new();
    let resp = app.get("/auth").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Форма авторизации"));
}

#[tokio::test]
async fn test_add_keeps_reserved_form_characters() {
    let app = TestApp::new();
    let resp = app
        .post_form(
            "/cart/add",
            &[
                ("name", "Сет \"Сакура\" & чай"),
                ("price", "990 ₽"),
                ("description", "ролл=2+суп 50%"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let record = app.saved_record().expect("cart saved");
    assert_eq!(record[0]["name"], "Сет \"Сакура\" & чай");
    assert_eq!(record[0]["description"], "ролл=2+суп 50%");
    assert_eq!(record[0]["price"], 990);
}
