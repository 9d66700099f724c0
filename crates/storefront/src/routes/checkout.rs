//! Checkout flow handlers.
//!
//! The rich checkout: validate the full shipping/payment form, simulate a
//! processing delay, then clear the cart and confirm. Submission cannot fail
//! once validation passes - there is no payment gateway behind it.

use axum::{Json, extract::State};
use minishop_core::{CheckoutForm, OrderId, OrderTotals};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Confirmation of a placed order.
#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    /// Generated order identifier. Not stored anywhere.
    pub id: OrderId,
    /// The totals charged, as computed at submission time.
    #[serde(flatten)]
    pub totals: OrderTotals,
}

/// Totals preview for the checkout page.
///
/// Recomputed from current cart state on every request, never cached.
#[instrument(skip(state))]
pub async fn totals(State(state): State<AppState>) -> Json<OrderTotals> {
    Json(OrderTotals::compute(state.cart().cart()))
}

/// Submit the checkout form.
///
/// Field validation failures respond 422 with per-field messages and leave
/// the cart unchanged. On success the configured processing delay elapses
/// (no lock held), the cart is cleared and persisted, and the confirmation
/// carries a freshly generated order id.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<CheckoutForm>,
) -> Result<Json<OrderConfirmation>> {
    form.validate().map_err(AppError::Validation)?;

    // Snapshot totals before the simulated delay; the charge is what the
    // customer saw at submission time.
    let totals = {
        let store = state.cart();
        if store.cart().is_empty() {
            return Err(AppError::EmptyCart);
        }
        OrderTotals::compute(store.cart())
    };

    tokio::time::sleep(state.config().checkout_delay).await;

    state.cart().clear()?;

    let id = OrderId::generate();
    tracing::info!(order_id = %id, total = %totals.total, "Checkout complete, cart cleared");

    Ok(Json(OrderConfirmation { id, totals }))
}
