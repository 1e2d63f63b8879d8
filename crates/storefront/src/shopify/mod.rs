//! Shopify Storefront API cart shapes and reconciliation.
//!
//! # Architecture
//!
//! - Shopify is the source of truth for carts; the storefront only keeps an
//!   optimistic copy in the session
//! - The client layer that talks to Shopify hands its carts to
//!   `POST /cart/sync`, which converts them here and replaces the
//!   optimistic copy wholesale
//!
//! # Example
//!
//! ```rust
//! use pineapple_cart_core::Cart;
//! use pineapple_cart_storefront::shopify::types::Cart as ShopifyCart;
//!
//! # fn reconcile(server: &ShopifyCart) -> Cart {
//! Cart::from(server)
//! # }
//! ```

pub mod conversions;
pub mod types;

pub use types::Cart as ShopifyCart;
