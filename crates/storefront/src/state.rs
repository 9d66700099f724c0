//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::storage::{CartStore, StorageError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart sits behind a `Mutex` because it is
/// the only mutable state in the process; critical sections are short and
/// synchronous, and no handler holds the lock across an await point.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create application state, opening the persisted cart store.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let cart = CartStore::open(&config.data_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::demo(),
                cart: Mutex::new(cart),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the cart store.
    ///
    /// A poisoned lock is recovered by taking the inner value: the cart
    /// record on disk is rewritten on the next mutation anyway.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
