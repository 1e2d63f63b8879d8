//! Naked Pineapple Cart Core - Shared types library.
//!
//! This crate provides the types shared by every part of the cart workspace:
//! - `cart` - The optimistic cart engine
//! - `storefront` - JSON cart surface for the storefront UI
//! - `cli` - Command-line tools for replaying and checking carts
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! logging, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money, cart snapshots, and product descriptors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
