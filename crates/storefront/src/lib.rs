//! Naked Pineapple Cart Storefront library.
//!
//! This crate provides the storefront's optimistic cart surface as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod shopify;
pub mod state;

pub use app::build_app;
