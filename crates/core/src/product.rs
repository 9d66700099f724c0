//! The immutable catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the catalog.
///
/// Products are static, read-only data: the catalog source compiles them in
/// and nothing ever mutates one. The cart keeps its own snapshot of the
/// fields it needs for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Free-text description.
    pub description: String,
    /// URL of the display image.
    pub image: String,
}
