//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use minishop_core::{Product, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::SortOption;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Catalog listing query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive search over name and description.
    pub q: Option<String>,
    /// Sort order; catalog order when absent.
    #[serde(default)]
    pub sort: SortOption,
}

/// List catalog products, optionally filtered and sorted.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    Json(state.catalog().browse(query.q.as_deref(), query.sort))
}

/// Product detail by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = ProductId::from(id);
    state
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
