//! Durable cart storage.
//!
//! The cart persists as a single namespaced JSON record on disk, the
//! server-side equivalent of the browser's local storage: read once when the
//! store opens, rewritten synchronously after every mutation so a process
//! restart restores the prior cart.
//!
//! Failure handling is deliberately forgiving: a missing record means an
//! empty cart, and a corrupt record is logged and treated as empty. Nothing
//! in the cart path is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use minishop_core::{Cart, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Fixed namespace key for the cart record.
const CART_STORAGE_KEY: &str = "cart-storage";

/// Errors writing the cart record.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("cart storage io: {0}")]
    Io(#[from] std::io::Error),
    /// The cart record could not be encoded.
    #[error("cart record encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The serialized cart record envelope.
#[derive(Debug, Serialize, Deserialize)]
struct CartRecord {
    #[serde(flatten)]
    cart: Cart,
    saved_at: DateTime<Utc>,
}

/// The cart store: in-memory cart plus its durable record.
///
/// Every mutating operation updates the in-memory cart and then persists the
/// full state before returning, so a reload always observes the last
/// mutation.
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    cart: Cart,
}

impl CartStore {
    /// Open the cart store, restoring any previously persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created. Unreadable
    /// or corrupt records are not errors; they load as an empty cart.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(format!("{CART_STORAGE_KEY}.json"));
        let cart = load_record(&path);

        Ok(Self { path, cart })
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn add_item(&mut self, product: &Product) -> Result<(), StorageError> {
        self.cart.add_item(product);
        self.persist()
    }

    /// Set a line's quantity (absolute, clamped to 1) and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), StorageError> {
        self.cart.update_quantity(id, quantity);
        self.persist()
    }

    /// Remove a line item outright and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), StorageError> {
        self.cart.remove_item(id);
        self.persist()
    }

    /// Empty the cart and persist. Invoked on successful order placement.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist()
    }

    /// Rewrite the record from current state.
    ///
    /// Also used by the readiness check to verify the data directory is
    /// writable.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let record = CartRecord {
            cart: self.cart.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Read the cart record, degrading to an empty cart on any failure.
fn load_record(path: &Path) -> Cart {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Cart::new(),
        Err(e) => {
            tracing::warn!("Failed to read cart record {path:?}, starting empty: {e}");
            return Cart::new();
        }
    };

    match serde_json::from_str::<CartRecord>(&raw) {
        Ok(record) => {
            tracing::info!(
                items = record.cart.items().len(),
                saved_at = %record.saved_at,
                "Restored persisted cart"
            );
            record.cart
        }
        Err(e) => {
            tracing::warn!("Corrupt cart record {path:?}, starting empty: {e}");
            Cart::new()
        }
    }
}
