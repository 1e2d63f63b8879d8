//! Session-related types.
//!
//! Keys for state stored in the shopper's session.

/// Session keys for cart data.
pub mod keys {
    /// Key for the optimistic cart snapshot shown to the shopper.
    pub const OPTIMISTIC_CART: &str = "optimistic_cart";
}
