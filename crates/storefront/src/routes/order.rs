//! The minimal order-creation stub.
//!
//! Accepts `{ form: { name, email, address }, items, subtotal }`, checks only
//! that the three form fields are non-empty, and responds with a freshly
//! generated order id. No order is stored, nothing is idempotent, and
//! identical submissions are never correlated - every valid call succeeds
//! with a new random identifier.

use axum::Json;
use minishop_core::{OrderId, Price};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};

/// Shipping fields of the minimal order form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// The submitted order request: form plus a cart snapshot.
///
/// The items and subtotal are accepted but not validated - the stub only
/// cares about the form fields.
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub form: OrderForm,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub subtotal: Price,
}

/// Response carrying the generated order identifier.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub id: OrderId,
}

/// Create an order (stub).
#[instrument(skip(req))]
pub async fn create(Json(req): Json<OrderRequest>) -> Result<Json<OrderCreated>> {
    if req.form.name.is_empty() || req.form.email.is_empty() || req.form.address.is_empty() {
        return Err(AppError::InvalidOrder);
    }

    let id = OrderId::generate();
    tracing::info!(
        order_id = %id,
        items = req.items.len(),
        subtotal = %req.subtotal,
        "Order placed (stub, not stored)"
    );

    Ok(Json(OrderCreated { id }))
}
