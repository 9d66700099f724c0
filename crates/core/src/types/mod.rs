//! Core types for MiniShop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;

pub use email::{Email, EmailError};
pub use id::{OrderId, OrderIdError, ProductId};
pub use price::Price;
