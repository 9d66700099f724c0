//! Integration test harness for MiniShop.
//!
//! Builds the real storefront router against a temporary cart data
//! directory and drives it in process via `tower::ServiceExt::oneshot` - no
//! network listener involved. The checkout delay is zeroed so submission
//! tests run instantly.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use minishop_storefront::config::StorefrontConfig;
use minishop_storefront::state::AppState;

/// A storefront application under test.
pub struct TestApp {
    router: Router,
    data_dir: TempDir,
}

impl TestApp {
    /// Build a fresh app with an empty cart in a temporary data directory.
    #[must_use]
    pub fn spawn() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp data dir");
        let router = build_router(&data_dir);
        Self { router, data_dir }
    }

    /// Rebuild the app on the same data directory, simulating a process
    /// restart. The persisted cart record must survive.
    #[must_use]
    pub fn restart(self) -> Self {
        let router = build_router(&self.data_dir);
        Self {
            router,
            data_dir: self.data_dir,
        }
    }

    /// The cart data directory backing this app.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    /// Issue a GET request and parse the JSON response body.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Issue a POST request with a JSON body and parse the JSON response.
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}

fn build_router(data_dir: &TempDir) -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        data_dir: data_dir.path().to_path_buf(),
        checkout_delay: Duration::ZERO,
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state = AppState::new(config).expect("Failed to build app state");
    minishop_storefront::app(state)
}

/// A checkout form with every field valid.
#[must_use]
pub fn valid_checkout_form() -> Value {
    serde_json::json!({
        "name": "Alex T.",
        "email": "alex@example.com",
        "address": "1 Main St",
        "city": "Anytown",
        "zip": "123456",
        "card": "1111222233334444",
    })
}
