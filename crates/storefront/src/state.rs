//! Application state shared across handlers.

use std::sync::Arc;

use sakura_core::CartStore;
use tokio::sync::{Mutex, MutexGuard};

use crate::catalog::{Menu, MenuError};
use crate::config::StorefrontConfig;
use crate::storage::FileStore;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("menu error: {0}")]
    Menu(#[from] MenuError),
    #[error("storage error: {0}")]
    Storage(#[from] sakura_core::StorageError),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart store sits behind a mutex so that
/// each request runs its mutate, persist and render steps without
/// interleaving with another request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    menu: Menu,
    cart: Mutex<CartStore<FileStore>>,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// Loads the menu and restores the cart from the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu is invalid or the data directory cannot
    /// be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let menu = Menu::load(config.menu_path.as_deref())?;
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::with_parts(config, menu, CartStore::open(store)))
    }

    /// Assemble the state from already-built parts.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        menu: Menu,
        cart: CartStore<FileStore>,
    ) -> Self {
        tracing::info!(items = cart.item_count(), "Cart restored");
        Self {
            inner: Arc::new(AppStateInner {
                config,
                menu,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.inner.menu
    }

    /// Lock the cart store for the duration of one user action.
    pub async fn cart(&self) -> MutexGuard<'_, CartStore<FileStore>> {
        self.inner.cart.lock().await
    }
}
