//! Integration tests for the Naked Pineapple cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pineapple-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Engine scenarios and properties across the core and cart crates
//! - `storefront_cart_api` - Cart routes driven in-process through the full middleware stack
//!
//! This library holds the fixtures both suites share.

use std::net::{IpAddr, Ipv4Addr};

use pineapple_cart_core::{Money, Product, ProductVariant, SelectedOption};
use pineapple_cart_storefront::config::{CartConfig, StorefrontConfig};

/// Storefront configuration for in-process tests (plain HTTP, USD).
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        cart: CartConfig::default(),
    }
}

/// A variant priced at `amount` USD.
#[must_use]
pub fn variant(id: &str, amount: &str) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        title: "Default Title".to_string(),
        price: Money::new(amount, "USD"),
        selected_options: vec![SelectedOption {
            name: "Title".to_string(),
            value: "Default Title".to_string(),
        }],
    }
}

/// A product with no image.
#[must_use]
pub fn product(handle: &str) -> Product {
    Product {
        id: format!("gid://shopify/Product/{handle}"),
        handle: handle.to_string(),
        title: handle.to_string(),
        featured_image: None,
    }
}
