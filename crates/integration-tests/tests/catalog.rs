//! Catalog listing, search, sort, and detail lookups.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use minishop_integration_tests::TestApp;

#[tokio::test]
async fn listing_returns_all_six_products() {
    let app = TestApp::spawn();
    let (status, body) = app.get("/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn search_filters_by_name() {
    let app = TestApp::spawn();
    let (_, body) = app.get("/products?q=keyboard").await;
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], "p1");
}

#[tokio::test]
async fn sort_by_price_ascending_puts_cheapest_first() {
    let app = TestApp::spawn();
    let (_, body) = app.get("/products?sort=price_asc").await;
    let products = body.as_array().unwrap();
    assert_eq!(products.first().unwrap()["id"], "p5");
    assert_eq!(products.last().unwrap()["id"], "p3");
}

#[tokio::test]
async fn detail_returns_product_fields() {
    let app = TestApp::spawn();
    let (status, body) = app.get("/products/p3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "4K Ultra HD Monitor");
    assert_eq!(body["price"], "499.50");
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = TestApp::spawn();
    let (status, body) = app.get("/products/p99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "product p99");
}

#[tokio::test]
async fn reviews_listing_returns_static_testimonials() {
    let app = TestApp::spawn();
    let (status, body) = app.get("/reviews").await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0]["name"], "Alex T.");
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["product"], "Wireless Mechanical Keyboard");
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::spawn();

    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn readiness_reports_unavailable_when_record_unwritable() {
    let app = TestApp::spawn();

    // A directory squatting on the record path makes the cart record
    // unwritable without relying on filesystem permissions.
    std::fs::create_dir(app.data_dir().join("cart-storage.json")).unwrap();

    let (status, _) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}
