//! Domain types for Shopify Storefront API carts.
//!
//! These mirror the cart payload the Storefront API returns, as already
//! decoded by the client layer. Only the fields reconciliation reads are
//! declared; anything else in the payload (notes, attributes, discount codes,
//! per-unit costs) is ignored on deserialization.

use serde::{Deserialize, Serialize};

pub use pineapple_cart_core::{Money, SelectedOption};

// =============================================================================
// Image Types
// =============================================================================

/// Product or variant image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Image width in pixels.
    #[serde(default)]
    pub width: Option<i64>,
    /// Image height in pixels.
    #[serde(default)]
    pub height: Option<i64>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// Simplified product info for cart merchandise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartMerchandiseProduct {
    /// Product ID.
    pub id: String,
    /// Product handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Featured image.
    #[serde(default)]
    pub featured_image: Option<Image>,
}

/// Merchandise in a cart line (simplified product variant info).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartMerchandise {
    /// Variant ID.
    pub id: String,
    /// Variant title.
    pub title: String,
    /// Selected options.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    #[serde(default)]
    pub image: Option<Image>,
    /// Parent product info.
    pub product: CartMerchandiseProduct,
}

/// Cost for a cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineCost {
    /// Total (after discounts).
    pub total_amount: Money,
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart line ID.
    pub id: String,
    /// Quantity.
    pub quantity: i64,
    /// Line cost.
    pub cost: CartLineCost,
    /// Product variant.
    pub merchandise: CartMerchandise,
}

/// Cart cost summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCost {
    /// Subtotal before tax/shipping.
    #[serde(rename = "subtotal_amount")]
    pub subtotal: Money,
    /// Total amount.
    #[serde(rename = "total_amount")]
    pub total: Money,
    /// Total tax amount.
    #[serde(rename = "total_tax_amount", default)]
    pub total_tax: Option<Money>,
}

/// A shopping cart as Shopify returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Cart ID.
    pub id: String,
    /// Checkout URL.
    pub checkout_url: String,
    /// Total item quantity.
    pub total_quantity: i64,
    /// Cart cost summary.
    pub cost: CartCost,
    /// Cart lines.
    #[serde(default)]
    pub lines: Vec<CartLine>,
}
