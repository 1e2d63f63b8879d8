//! Cart snapshot types.
//!
//! A [`Cart`] is an immutable-by-convention snapshot: the engine never edits
//! one in place for a caller, it hands back a new one.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::product::{Product, ProductVariant};

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "Large", "Blue").
    pub value: String,
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

/// Simplified product info for cart merchandise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
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

/// The variant a cart line is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartMerchandise {
    /// Variant ID. No two lines in a cart share one.
    pub id: String,
    /// Variant title.
    pub title: String,
    /// Selected options.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    /// Parent product info.
    pub product: CartProduct,
}

impl CartMerchandise {
    /// Build line merchandise from a variant and its product.
    #[must_use]
    pub fn from_variant(variant: &ProductVariant, product: &Product) -> Self {
        Self {
            id: variant.id.clone(),
            title: variant.title.clone(),
            selected_options: variant.selected_options.clone(),
            product: CartProduct {
                id: product.id.clone(),
                handle: product.handle.clone(),
                title: product.title.clone(),
                featured_image: product.featured_image.clone(),
            },
        }
    }
}

/// Cost for a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemCost {
    /// Unit price times quantity.
    pub total_amount: Money,
}

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart line ID. `None` for lines that only exist optimistically.
    #[serde(default)]
    pub id: Option<String>,
    /// Quantity, at least 1 while the line exists.
    pub quantity: i64,
    /// Line cost.
    pub cost: CartItemCost,
    /// Product variant.
    pub merchandise: CartMerchandise,
}

/// Cart cost summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCost {
    /// Subtotal before tax. Mirrors the total; discounts are server-side.
    pub subtotal_amount: Money,
    /// Sum of line totals.
    pub total_amount: Money,
    /// Total tax amount. Always zero locally.
    pub total_tax_amount: Money,
}

impl CartCost {
    /// All-zero cost in the given currency.
    #[must_use]
    pub fn zero(currency_code: &str) -> Self {
        Self {
            subtotal_amount: Money::zero(currency_code),
            total_amount: Money::zero(currency_code),
            total_tax_amount: Money::zero(currency_code),
        }
    }
}

/// A shopping cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Commerce platform cart ID, absent until first synced.
    #[serde(default)]
    pub id: Option<String>,
    /// Checkout URL from the commerce platform.
    #[serde(default)]
    pub checkout_url: Option<String>,
    /// Total item quantity.
    pub total_quantity: i64,
    /// Cart cost summary.
    pub cost: CartCost,
    /// Cart lines, in insertion order.
    #[serde(default)]
    pub lines: Vec<CartItem>,
}

impl Cart {
    /// A fresh cart with no ID, no lines and zero totals.
    #[must_use]
    pub fn empty(currency_code: &str) -> Self {
        Self {
            id: None,
            checkout_url: None,
            total_quantity: 0,
            cost: CartCost::zero(currency_code),
            lines: Vec::new(),
        }
    }

    /// Find the line for a merchandise ID.
    #[must_use]
    pub fn line(&self, merchandise_id: &str) -> Option<&CartItem> {
        self.lines
            .iter()
            .find(|line| line.merchandise.id == merchandise_id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency the cart totals are expressed in.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.cost.total_amount.currency_code
    }
}
