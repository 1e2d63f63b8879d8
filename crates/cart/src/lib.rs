//! Naked Pineapple Cart - Optimistic cart state engine.
//!
//! The storefront shows cart changes before the commerce platform confirms
//! them. This crate computes those optimistic snapshots: given the previous
//! cart (or none) and an action, it returns the next cart with quantities and
//! totals recomputed.
//!
//! # Architecture
//!
//! - [`totals`] - Line and cart total recomputation
//! - [`action`] - The tagged actions a cart accepts
//! - [`engine`] - The pure transition function
//! - [`store`] - Stateful wrapper handed to UI code
//! - [`invariants`] - Consistency checks over any cart snapshot
//!
//! The engine performs no I/O and never fails: unknown lines and unknown
//! action kinds are no-ops. Syncing with the commerce platform, and reverting
//! when that sync fails, is the caller's job.
//!
//! # Example
//!
//! ```
//! use pineapple_cart::{CartAction, CartEngine, UpdateType};
//! use pineapple_cart_core::{Money, Product, ProductVariant};
//!
//! let engine = CartEngine::default();
//! let variant = ProductVariant {
//!     id: "gid://shopify/ProductVariant/1".to_string(),
//!     title: "Default Title".to_string(),
//!     price: Money::new("10.00", "USD"),
//!     selected_options: vec![],
//! };
//! let product = Product {
//!     id: "gid://shopify/Product/1".to_string(),
//!     handle: "soap".to_string(),
//!     title: "Soap".to_string(),
//!     featured_image: None,
//! };
//!
//! let cart = engine.apply(None, CartAction::add(variant, product, 2));
//! assert_eq!(cart.cost.total_amount.amount, "20.00");
//!
//! let cart = engine.apply(
//!     Some(&cart),
//!     CartAction::update("gid://shopify/ProductVariant/1", UpdateType::Increment, None),
//! );
//! assert_eq!(cart.total_quantity, 3);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod engine;
pub mod invariants;
pub mod store;
pub mod totals;

pub use action::{CartAction, UpdateType};
pub use engine::{CartEngine, apply};
pub use invariants::{Violation, check};
pub use store::CartStore;
