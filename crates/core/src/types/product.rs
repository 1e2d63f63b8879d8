//! Product and variant descriptors supplied by the commerce client layer.
//!
//! These are the slices of a catalog product the cart needs when a shopper
//! adds a variant: enough to price the line and to link back to the product.

use serde::{Deserialize, Serialize};

use super::cart::{Image, SelectedOption};
use super::money::Money;

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID (the cart's merchandise ID).
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// Current unit price.
    pub price: Money,
    /// Selected options for this variant.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

/// The parent product of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Featured image.
    #[serde(default)]
    pub featured_image: Option<Image>,
}
