//! Cart route handlers.
//!
//! Every mutation goes through the [`CartStore`](crate::storage::CartStore),
//! which persists the full cart state before the handler responds. The
//! handlers return the whole cart view so clients always render from the
//! state that was just persisted.

use axum::{Json, extract::State};
use minishop_core::{Cart, Price, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: Price,
    pub line_total: Price,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Price,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    image: item.image.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    line_total: item.line_total(),
                })
                .collect(),
            subtotal: cart.subtotal(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart badge count.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Add to cart request.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update quantity request. The quantity is absolute and clamped to 1.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart request.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Current cart view.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(state.cart().cart()))
}

/// Add one unit of a product to the cart.
///
/// Unknown product ids are a 404; repeated adds accumulate quantity on the
/// existing line.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .get(&req.product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", req.product_id)))?;

    let mut store = state.cart();
    store.add_item(&product)?;
    Ok(Json(CartView::from(store.cart())))
}

/// Set a cart line's quantity.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let mut store = state.cart();
    store.update_quantity(&req.product_id, req.quantity)?;
    Ok(Json(CartView::from(store.cart())))
}

/// Remove a line from the cart, regardless of quantity.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut store = state.cart();
    store.remove_item(&req.product_id)?;
    Ok(Json(CartView::from(store.cart())))
}

/// Cart badge count.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    Json(CartCount {
        count: state.cart().cart().item_count(),
    })
}
