//! Cart flow through the HTTP surface: add, count, totals, dates, order form.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use bakery_core::DeliveryDate;
use bakery_integration_tests::TestApp;
use chrono::{Days, Local};

fn tomorrow() -> DeliveryDate {
    let today = Local::now().date_naive();
    DeliveryDate::new(today.checked_add_days(Days::new(1)).unwrap())
}

#[tokio::test]
async fn test_empty_cart() {
    let mut app = TestApp::new();

    let page = app.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Корзина пуста"));

    let count = app.get("/cart/count").await;
    assert_eq!(count.status, StatusCode::OK);
    assert!(!count.body.contains("cart-badge"));
}

#[tokio::test]
async fn test_add_items_updates_count_and_total() {
    let mut app = TestApp::new();

    let resp = app.post_form("/cart/add", &[("product_id", "2")]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/#catalog"));

    app.post_form("/cart/add", &[("product_id", "2")]).await;
    app.post_form("/cart/add", &[("product_id", "1")]).await;

    let count = app.get("/cart/count").await;
    assert!(count.body.contains(">3<"));

    let page = app.get("/cart").await;
    assert!(page.body.contains("Пирожки с мясом"));
    assert!(page.body.contains("240 ₽"));
    assert!(page.body.contains("Яблочный пирог"));
    assert!(page.body.contains("Итого: <strong>1090 ₽</strong>"));
}

#[tokio::test]
async fn test_unknown_product_counts_but_costs_nothing() {
    let mut app = TestApp::new();

    app.post_form("/cart/add", &[("product_id", "999")]).await;

    let count = app.get("/cart/count").await;
    assert!(count.body.contains(">1<"));

    let page = app.get("/cart").await;
    assert!(!page.body.contains("Корзина пуста"));
    assert!(page.body.contains("Итого: <strong>0 ₽</strong>"));
}

#[tokio::test]
async fn test_malformed_product_id_is_rejected() {
    let mut app = TestApp::new();

    let resp = app.post_form("/cart/add", &[("product_id", "abc")]).await;
    assert!(resp.status.is_client_error());

    let count = app.get("/cart/count").await;
    assert!(!count.body.contains("cart-badge"));
}

#[tokio::test]
async fn test_add_redirects_back_to_filtered_catalog() {
    let mut app = TestApp::new();
    let back = "/?category=%D0%9F%D0%B8%D1%80%D0%BE%D0%B6%D0%BA%D0%B8#catalog";

    let resp = app
        .post_form("/cart/add", &[("product_id", "4"), ("return_to", back)])
        .await;
    assert_eq!(resp.location(), Some(back));
}

#[tokio::test]
async fn test_add_refuses_offsite_redirect() {
    let mut app = TestApp::new();

    let resp = app
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("return_to", "https://evil.example/")],
        )
        .await;
    assert_eq!(resp.location(), Some("/#catalog"));

    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("return_to", "//evil.example")])
        .await;
    assert_eq!(resp.location(), Some("/#catalog"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let mut alice = TestApp::new();
    alice.post_form("/cart/add", &[("product_id", "1")]).await;

    let mut bob = alice.new_visitor();
    let count = bob.get("/cart/count").await;
    assert!(!count.body.contains("cart-badge"));

    let count = alice.get("/cart/count").await;
    assert!(count.body.contains(">1<"));
}

#[tokio::test]
async fn test_selected_date_applies_to_new_lines() {
    let mut app = TestApp::new();
    let date = tomorrow();

    let iso = date.to_iso();

    let resp = app
        .post_form("/order-date", &[("date", iso.as_str()), ("return_to", "/#catalog")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/#catalog"));

    let home = app.get("/").await;
    assert!(home.body.contains(&date.format_long()));

    app.post_form("/cart/add", &[("product_id", "3")]).await;
    let page = app.get("/cart").await;
    assert!(page.body.contains(&format!("К {}", date.format_short())));
}

#[tokio::test]
async fn test_clearing_date_keeps_existing_line_dates() {
    let mut app = TestApp::new();
    let date = tomorrow();

    let iso = date.to_iso();

    app.post_form("/order-date", &[("date", iso.as_str())]).await;
    app.post_form("/cart/add", &[("product_id", "1")]).await;

    let resp = app.post_form("/order-date", &[("date", "")]).await;
    assert_eq!(resp.location(), Some("/"));
    assert!(app.get("/").await.body.contains("Выберите дату"));

    // Added before clearing, so the line keeps its date
    let page = app.get("/cart").await;
    assert!(page.body.contains(&format!("К {}", date.format_short())));

    // Re-adding with no date selected overwrites it
    app.post_form("/cart/add", &[("product_id", "1")]).await;
    let page = app.get("/cart").await;
    assert!(!page.body.contains("cart-line__date"));
}

#[tokio::test]
async fn test_past_date_is_rejected() {
    let mut app = TestApp::new();

    let resp = app.post_form("/order-date", &[("date", "2000-01-01")]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body.contains("Доставка возможна не раньше"));

    let resp = app.post_form("/order-date", &[("date", "not-a-date")]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    assert!(app.get("/").await.body.contains("Выберите дату"));
}

#[tokio::test]
async fn test_today_is_not_a_delivery_date() {
    let mut app = TestApp::new();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let resp = app.post_form("/order-date", &[("date", today.as_str())]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.body.contains(&tomorrow().format_long()));

    let home = app.get("/").await;
    assert!(home.body.contains("Выберите дату"));
    assert!(home.body.contains(&format!("min=\"{}\"", tomorrow().to_iso())));
}

#[tokio::test]
async fn test_order_form_is_saved_in_session() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "2")]).await;

    let resp = app
        .post_form(
            "/cart/order",
            &[
                ("name", "Мария"),
                ("phone", "+7 900 123-45-67"),
                ("address", "ул. Садовая, 5"),
                ("comment", "Позвонить заранее"),
                ("coupon", "ignored"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/cart?saved=1"));

    let page = app.get("/cart?saved=1").await;
    assert!(page.body.contains("Данные заказа сохранены"));
    assert!(page.body.contains("value=\"Мария\""));
    assert!(page.body.contains("Позвонить заранее"));

    // Submitting leaves the cart untouched
    assert!(page.body.contains("Итого: <strong>120 ₽</strong>"));

    // Later edits overwrite single fields
    app.post_form("/cart/order", &[("name", "Андрей")]).await;
    let page = app.get("/cart").await;
    assert!(page.body.contains("value=\"Андрей\""));
    assert!(page.body.contains("Позвонить заранее"));
    assert!(!page.body.contains("Данные заказа сохранены"));
}
