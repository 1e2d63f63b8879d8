//! Stateful cart handle for UI code.
//!
//! [`CartStore`] owns the current snapshot and applies actions through a
//! [`CartEngine`]. It is an explicit object, not a process-wide global: each
//! session, request, or test builds its own.
//!
//! Optimistic updates follow a simple pattern:
//!
//! ```
//! use pineapple_cart::{CartAction, CartStore, UpdateType};
//!
//! let mut store = CartStore::default();
//! let previous = store.dispatch(CartAction::update("v1", UpdateType::Increment, None));
//!
//! // ...the commerce platform rejected the change:
//! if let Some(previous) = previous {
//!     store.set_cart(previous);
//! }
//! ```

use tracing::debug;

use pineapple_cart_core::{Cart, Product, ProductVariant};

use crate::action::{CartAction, UpdateType};
use crate::engine::CartEngine;

/// The current cart snapshot plus the engine that advances it.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    engine: CartEngine,
    cart: Option<Cart>,
}

impl CartStore {
    /// A store with no cart yet.
    #[must_use]
    pub const fn new(engine: CartEngine) -> Self {
        Self { engine, cart: None }
    }

    /// A store seeded with a previously fetched cart.
    #[must_use]
    pub const fn with_cart(engine: CartEngine, cart: Option<Cart>) -> Self {
        Self { engine, cart }
    }

    /// The current cart, if one exists.
    #[must_use]
    pub const fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// The current cart, or an empty one.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.cart
            .clone()
            .unwrap_or_else(|| self.engine.empty_cart())
    }

    /// The engine this store applies actions with.
    #[must_use]
    pub const fn engine(&self) -> &CartEngine {
        &self.engine
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cart.as_ref().map_or(0, Cart::line_count)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.cart.as_ref().map_or(0, |cart| cart.total_quantity)
    }

    /// Whether there is no cart or it has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.as_ref().is_none_or(Cart::is_empty)
    }

    /// Apply an action and return the snapshot it replaced.
    pub fn dispatch(&mut self, action: CartAction) -> Option<Cart> {
        let next = self.next(action);
        self.cart.replace(next)
    }

    /// Add `quantity` units of a variant.
    pub fn add_item(&mut self, variant: ProductVariant, product: Product, quantity: i64) -> &Cart {
        self.commit(CartAction::add(variant, product, quantity))
    }

    /// Change the quantity of a line.
    pub fn update_item(
        &mut self,
        merchandise_id: &str,
        update_type: UpdateType,
        quantity: Option<i64>,
    ) -> &Cart {
        self.commit(CartAction::update(merchandise_id, update_type, quantity))
    }

    /// Remove a line.
    pub fn remove_item(&mut self, merchandise_id: &str) -> &Cart {
        self.commit(CartAction::remove(merchandise_id))
    }

    /// Reset to an empty cart.
    pub fn clear(&mut self) -> &Cart {
        self.commit(CartAction::ClearCart)
    }

    /// Replace the snapshot, e.g. with the server's cart after a sync.
    pub fn set_cart(&mut self, cart: Cart) -> &Cart {
        self.commit(CartAction::SetCart { cart })
    }

    fn commit(&mut self, action: CartAction) -> &Cart {
        let next = self.next(action);
        self.cart.insert(next)
    }

    fn next(&self, action: CartAction) -> Cart {
        let kind = action.kind();
        let next = self.engine.apply(self.cart.as_ref(), action);
        debug!(
            action = kind,
            lines = next.line_count(),
            total_quantity = next.total_quantity,
            total = %next.cost.total_amount,
            "Cart updated"
        );
        next
    }
}
