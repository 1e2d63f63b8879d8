//! Core types for the Naked Pineapple cart.
//!
//! This module provides the data model shared by the engine, the storefront
//! surface and the CLI.

pub mod cart;
pub mod money;
pub mod product;

pub use cart::{
    Cart, CartCost, CartItem, CartItemCost, CartMerchandise, CartProduct, Image, SelectedOption,
};
pub use money::{DEFAULT_CURRENCY_CODE, Money, MoneyError};
pub use product::{Product, ProductVariant};
