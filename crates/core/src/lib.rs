//! MiniShop Core - Shared domain types library.
//!
//! This crate provides the domain model used across all MiniShop components:
//! - `storefront` - The demo storefront HTTP service
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! filesystem access. Cart persistence and route handling live in the
//! storefront crate; everything here is deterministic and unit-testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`product`] - The immutable catalog product record
//! - [`cart`] - Cart line items and cart arithmetic
//! - [`checkout`] - Checkout form validation and order-total computation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod product;
pub mod types;

pub use cart::{Cart, CartLineItem};
pub use checkout::{CheckoutForm, OrderTotals, ValidationErrors};
pub use product::Product;
pub use types::*;
