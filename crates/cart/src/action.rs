//! Cart actions.
//!
//! Actions are serde-tagged on `"type"` so the storefront and the CLI can read
//! them straight from JSON:
//!
//! ```json
//! {"type": "update_item", "merchandise_id": "gid://shopify/ProductVariant/1", "update_type": "increment"}
//! ```

use serde::{Deserialize, Serialize};

use pineapple_cart_core::{Cart, Product, ProductVariant};

/// How an `UpdateItem` action changes a line's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    /// Quantity + 1.
    Increment,
    /// Quantity - 1.
    Decrement,
    /// Remove the line.
    Delete,
    /// Set the quantity to the supplied value.
    SetExact,
}

const fn default_quantity() -> i64 {
    1
}

/// A change to apply to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Change the quantity of an existing line.
    UpdateItem {
        /// Variant ID of the line.
        merchandise_id: String,
        /// How to change the quantity.
        update_type: UpdateType,
        /// Target quantity for [`UpdateType::SetExact`].
        #[serde(default)]
        quantity: Option<i64>,
    },
    /// Add a variant, merging into its line if present.
    AddItem {
        /// Variant being added.
        variant: ProductVariant,
        /// Parent product of the variant.
        product: Product,
        /// Quantity to add.
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    /// Remove a line.
    RemoveItem {
        /// Variant ID of the line.
        merchandise_id: String,
    },
    /// Reset to an empty cart.
    ClearCart,
    /// Replace the snapshot wholesale, typically with the server's cart.
    SetCart {
        /// The replacement cart.
        cart: Cart,
    },
    /// An action kind this engine does not know. Applying it changes nothing.
    #[serde(other)]
    Unknown,
}

impl CartAction {
    /// Build an `UpdateItem` action.
    #[must_use]
    pub fn update(
        merchandise_id: impl Into<String>,
        update_type: UpdateType,
        quantity: Option<i64>,
    ) -> Self {
        Self::UpdateItem {
            merchandise_id: merchandise_id.into(),
            update_type,
            quantity,
        }
    }

    /// Build an `AddItem` action.
    #[must_use]
    pub const fn add(variant: ProductVariant, product: Product, quantity: i64) -> Self {
        Self::AddItem {
            variant,
            product,
            quantity,
        }
    }

    /// Build a `RemoveItem` action.
    #[must_use]
    pub fn remove(merchandise_id: impl Into<String>) -> Self {
        Self::RemoveItem {
            merchandise_id: merchandise_id.into(),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UpdateItem { .. } => "update_item",
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::ClearCart => "clear_cart",
            Self::SetCart { .. } => "set_cart",
            Self::Unknown => "unknown",
        }
    }
}
