//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (cart storage writable)
//!
//! # Products
//! GET  /products               - Catalog listing (?q= search, ?sort= order)
//! GET  /products/{id}          - Product detail
//! GET  /reviews                - Static customer testimonials
//!
//! # Cart
//! GET  /cart                   - Cart view (items, subtotal, item count)
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (absolute, min 1)
//! POST /cart/remove            - Remove a line outright
//! GET  /cart/count             - Cart badge count
//!
//! # Checkout
//! GET  /checkout               - Totals preview (subtotal, shipping, total)
//! POST /checkout               - Validated submission; clears the cart
//!
//! # Order stub
//! POST /api/order              - Minimal order endpoint; returns a fresh id
//! ```
//!
//! All bodies are JSON. Validation failures respond 422 with field-keyed
//! messages (rich checkout) or 400 with a generic message (order stub).

pub mod cart;
pub mod checkout;
pub mod health;
pub mod order;
pub mod products;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health checks
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Product routes
        .nest("/products", product_routes())
        // Static testimonials shown on the landing page
        .route("/reviews", get(reviews::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout flow
        .route("/checkout", get(checkout::totals).post(checkout::submit))
        // Minimal order stub
        .route("/api/order", post(order::create))
}
