//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every error in the demo is locally recoverable:
//! validation failures block progression and leave prior state unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use minishop_core::ValidationErrors;
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Checkout form validation failed; carries per-field messages.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// The order stub received blank required fields.
    #[error("invalid order data")]
    InvalidOrder,

    /// Checkout was submitted against an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Cart record could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Storage(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, body) = match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "errors": errors }),
            ),
            // The stub endpoint's contract is a bare generic message
            Self::InvalidOrder => (StatusCode::BAD_REQUEST, json!({ "error": "Invalid data" })),
            Self::EmptyCart => (StatusCode::BAD_REQUEST, json!({ "error": "Cart is empty" })),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            // Don't expose internal error details to clients
            Self::Storage(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
