//! Customer review handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::catalog::Review;
use crate::state::AppState;

/// List the storefront's static customer testimonials.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.catalog().reviews().to_vec())
}
