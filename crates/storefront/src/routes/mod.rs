//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Cart (JSON)
//! GET  /cart                   - Current cart with line count and total quantity
//! PUT  /cart                   - Replace the cart wholesale
//! GET  /cart/count             - Cart count badge
//! POST /cart/add               - Add a variant
//! POST /cart/update            - Increment, decrement, delete, or set a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! POST /cart/sync              - Replace the cart with a Shopify cart
//! POST /cart/actions           - Apply any tagged cart action
//! ```

pub mod cart;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).put(cart::replace))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/sync", post(cart::sync))
        .route("/actions", post(cart::actions))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/cart", cart_routes())
}
