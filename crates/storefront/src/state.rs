//! Application state shared across handlers.

use std::sync::Arc;

use pineapple_cart::CartEngine;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the cart engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    engine: CartEngine,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The cart engine uses the configured default currency for empty carts.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let engine = CartEngine::new(config.cart.default_currency.clone());

        Self {
            inner: Arc::new(AppStateInner { config, engine }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart engine.
    #[must_use]
    pub fn engine(&self) -> &CartEngine {
        &self.inner.engine
    }
}
