//! MiniShop Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be driven in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;

use axum::Router;
use state::AppState;

/// Build the complete application router with state applied.
///
/// The binary adds tracing, CORS, and Sentry layers on top; tests drive this
/// router directly.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}
