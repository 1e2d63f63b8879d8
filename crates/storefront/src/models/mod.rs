//! Domain models for storefront.
//!
//! Only session-stored state lives here; cart snapshots themselves are
//! `pineapple_cart_core` types.

pub mod session;

pub use session::keys as session_keys;
