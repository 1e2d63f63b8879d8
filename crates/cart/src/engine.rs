//! The cart transition function.
//!
//! [`CartEngine::apply`] takes the previous snapshot (or `None` when no cart
//! exists yet) and an action, and returns the next snapshot. The previous
//! snapshot is never modified.

use tracing::debug;

use pineapple_cart_core::{
    Cart, CartItem, CartItemCost, CartMerchandise, DEFAULT_CURRENCY_CODE, Product, ProductVariant,
};

use crate::action::{CartAction, UpdateType};
use crate::totals;

/// Applies cart actions.
///
/// The only setting is the currency an empty cart is expressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEngine {
    default_currency: String,
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_CODE)
    }
}

/// Apply an action with the default engine.
#[must_use]
pub fn apply(current: Option<&Cart>, action: CartAction) -> Cart {
    CartEngine::default().apply(current, action)
}

impl CartEngine {
    /// Create an engine whose empty carts use `default_currency`.
    #[must_use]
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    /// Currency used for carts with no lines.
    #[must_use]
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// A fresh empty cart in the default currency.
    #[must_use]
    pub fn empty_cart(&self) -> Cart {
        Cart::empty(&self.default_currency)
    }

    /// Compute the cart that results from applying `action` to `current`.
    #[must_use]
    pub fn apply(&self, current: Option<&Cart>, action: CartAction) -> Cart {
        match action {
            CartAction::UpdateItem {
                merchandise_id,
                update_type,
                quantity,
            } => self.update_item(current, &merchandise_id, update_type, quantity),
            CartAction::AddItem {
                variant,
                product,
                quantity,
            } => self.add_item(current, &variant, &product, quantity),
            CartAction::RemoveItem { merchandise_id } => {
                self.remove_item(current, &merchandise_id)
            }
            CartAction::ClearCart => self.empty_cart(),
            CartAction::SetCart { cart } => cart,
            CartAction::Unknown => {
                debug!("Ignoring unknown cart action");
                self.current_or_empty(current)
            }
        }
    }

    fn current_or_empty(&self, current: Option<&Cart>) -> Cart {
        current.cloned().unwrap_or_else(|| self.empty_cart())
    }

    fn update_item(
        &self,
        current: Option<&Cart>,
        merchandise_id: &str,
        update_type: UpdateType,
        quantity: Option<i64>,
    ) -> Cart {
        let mut cart = self.current_or_empty(current);

        let Some(position) = position_of(&cart, merchandise_id) else {
            debug!(merchandise_id, "Update for a line not in the cart, ignoring");
            return cart;
        };

        let Some(line) = cart.lines.get_mut(position) else {
            return cart;
        };

        let new_quantity = match update_type {
            UpdateType::Delete => 0,
            UpdateType::Increment => line.quantity.saturating_add(1),
            UpdateType::Decrement => line.quantity.saturating_sub(1),
            UpdateType::SetExact => quantity.unwrap_or_else(|| line.quantity.saturating_sub(1)),
        };

        if new_quantity <= 0 {
            cart.lines.remove(position);
        } else {
            line.cost.total_amount = totals::rescaled_line_total(line, new_quantity);
            line.quantity = new_quantity;
        }

        totals::refresh(&mut cart);
        cart
    }

    fn add_item(
        &self,
        current: Option<&Cart>,
        variant: &ProductVariant,
        product: &Product,
        quantity: i64,
    ) -> Cart {
        let mut cart = self.current_or_empty(current);

        match position_of(&cart, &variant.id) {
            Some(position) => {
                let existing = cart.lines.get(position).map_or(0, |line| line.quantity);
                let new_quantity = existing.saturating_add(quantity);

                if new_quantity <= 0 {
                    cart.lines.remove(position);
                } else if let Some(line) = cart.lines.get_mut(position) {
                    *line = build_line(line.id.take(), variant, product, new_quantity);
                }
            }
            None if quantity > 0 => {
                cart.lines.push(build_line(None, variant, product, quantity));
            }
            None => {
                debug!(
                    merchandise_id = %variant.id,
                    quantity,
                    "Refusing to add a line with a non-positive quantity"
                );
                return cart;
            }
        }

        totals::refresh(&mut cart);
        cart
    }

    fn remove_item(&self, current: Option<&Cart>, merchandise_id: &str) -> Cart {
        let mut cart = self.current_or_empty(current);

        let Some(position) = position_of(&cart, merchandise_id) else {
            debug!(merchandise_id, "Remove for a line not in the cart, ignoring");
            return cart;
        };

        cart.lines.remove(position);
        totals::refresh(&mut cart);
        cart
    }
}

fn position_of(cart: &Cart, merchandise_id: &str) -> Option<usize> {
    cart.lines
        .iter()
        .position(|line| line.merchandise.id == merchandise_id)
}

/// A line for `quantity` units of a variant, priced from the variant.
fn build_line(
    id: Option<String>,
    variant: &ProductVariant,
    product: &Product,
    quantity: i64,
) -> CartItem {
    CartItem {
        id,
        quantity,
        cost: CartItemCost {
            total_amount: totals::variant_line_total(variant, quantity),
        },
        merchandise: CartMerchandise::from_variant(variant, product),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pineapple_cart_core::{CartCost, Money};

    fn variant(id: &str, amount: &str) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: "Default Title".to_string(),
            price: Money::new(amount, "USD"),
            selected_options: vec![],
        }
    }

    fn product() -> Product {
        Product {
            id: "gid://shopify/Product/1".to_string(),
            handle: "pineapple-soap".to_string(),
            title: "Pineapple Soap".to_string(),
            featured_image: None,
        }
    }

    fn scenario_a() -> Cart {
        apply(None, CartAction::add(variant("gidA", "10.00"), product(), 2))
    }

    #[test]
    fn test_scenario_a_add_to_empty_cart() {
        let cart = scenario_a();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].cost.total_amount.amount, "20.00");
        assert_eq!(cart.lines[0].id, None);
        assert_eq!(cart.total_quantity, 2);
        assert_eq!(cart.cost.total_amount.amount, "20.00");
        assert_eq!(cart.cost.subtotal_amount.amount, "20.00");
        assert_eq!(cart.cost.total_tax_amount, Money::zero("USD"));
    }

    #[test]
    fn test_scenario_b_increment_preserves_unit_price() {
        let cart = apply(
            Some(&scenario_a()),
            CartAction::update("gidA", UpdateType::Increment, None),
        );
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.lines[0].cost.total_amount.amount, "30.00");
        assert_eq!(cart.cost.total_amount.amount, "30.00");
    }

    #[test]
    fn test_scenarios_c_and_d_set_exact_then_decrement() {
        let b = apply(
            Some(&scenario_a()),
            CartAction::update("gidA", UpdateType::Increment, None),
        );
        let c = apply(
            Some(&b),
            CartAction::update("gidA", UpdateType::SetExact, Some(1)),
        );
        assert_eq!(c.lines[0].quantity, 1);
        assert_eq!(c.lines[0].cost.total_amount.amount, "10.00");

        let d = apply(Some(&c), CartAction::update("gidA", UpdateType::Decrement, None));
        assert!(d.lines.is_empty());
        assert_eq!(d.total_quantity, 0);
        assert_eq!(d.cost.total_amount.amount, "0");
        assert_eq!(d.currency_code(), "USD");
    }

    #[test]
    fn test_scenario_e_remove_from_empty_cart() {
        let cart = apply(None, CartAction::remove("nonexistent"));
        assert_eq!(cart, Cart::empty("USD"));
    }

    #[test]
    fn test_scenario_f_clear_cart() {
        let mut cart = scenario_a();
        cart.id = Some("gid://shopify/Cart/abc".to_string());
        let cart = apply(
            Some(&cart),
            CartAction::add(variant("gidB", "5.00"), product(), 1),
        );
        assert_eq!(cart.lines.len(), 2);

        let cleared = CartEngine::new("CAD").apply(Some(&cart), CartAction::ClearCart);
        assert_eq!(cleared, Cart::empty("CAD"));
    }

    #[test]
    fn test_add_existing_merges_and_refreshes_price() {
        let cart = scenario_a();
        let cart = apply(
            Some(&cart),
            CartAction::add(variant("gidA", "12.50"), product(), 1),
        );
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.lines[0].cost.total_amount.amount, "37.50");
        assert_eq!(cart.cost.total_amount.amount, "37.50");
    }

    #[test]
    fn test_add_keeps_server_line_id() {
        let mut cart = scenario_a();
        cart.lines[0].id = Some("gid://shopify/CartLine/1".to_string());
        let cart = apply(
            Some(&cart),
            CartAction::add(variant("gidA", "10.00"), product(), 1),
        );
        assert_eq!(cart.lines[0].id.as_deref(), Some("gid://shopify/CartLine/1"));
    }

    #[test]
    fn test_add_appends_new_lines_in_order() {
        let cart = scenario_a();
        let cart = apply(
            Some(&cart),
            CartAction::add(variant("gidB", "1.25"), product(), 4),
        );
        assert_eq!(cart.lines[0].merchandise.id, "gidA");
        assert_eq!(cart.lines[1].merchandise.id, "gidB");
        assert_eq!(cart.lines[1].cost.total_amount.amount, "5.00");
        assert_eq!(cart.total_quantity, 6);
        assert_eq!(cart.cost.total_amount.amount, "25.00");
    }

    #[test]
    fn test_add_non_positive_quantity_adds_nothing() {
        let cart = apply(None, CartAction::add(variant("gidA", "10.00"), product(), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_line_is_noop() {
        let cart = scenario_a();
        let next = apply(
            Some(&cart),
            CartAction::update("missing", UpdateType::Increment, None),
        );
        assert_eq!(next, cart);
    }

    #[test]
    fn test_update_delete_removes_line() {
        let cart = apply(
            Some(&scenario_a()),
            CartAction::update("gidA", UpdateType::Delete, Some(10)),
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_exact_without_quantity_decrements() {
        let cart = apply(
            Some(&scenario_a()),
            CartAction::update("gidA", UpdateType::SetExact, None),
        );
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.cost.total_amount.amount, "10.00");
    }

    #[test]
    fn test_set_exact_negative_removes_line() {
        let cart = apply(
            Some(&scenario_a()),
            CartAction::update("gidA", UpdateType::SetExact, Some(-3)),
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_server_line_with_whole_total() {
        // Server carts can carry totals without cents, e.g. after a discount
        let mut server = apply(None, CartAction::add(variant("gidA", "10.00"), product(), 3));
        server.lines[0].cost.total_amount = Money::new("20", "USD");

        let cart = apply(Some(&server), CartAction::SetCart { cart: server.clone() });
        let cart = apply(Some(&cart), CartAction::update("gidA", UpdateType::Decrement, None));

        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].cost.total_amount.amount, "13.33");
        assert_eq!(cart.cost.total_amount.amount, "13.33");
    }

    #[test]
    fn test_emptying_cart_keeps_its_currency() {
        let eur = ProductVariant {
            price: Money::new("8.00", "EUR"),
            ..variant("gidE", "0")
        };
        let cart = apply(None, CartAction::add(eur, product(), 1));
        assert_eq!(cart.currency_code(), "EUR");

        let cart = apply(Some(&cart), CartAction::remove("gidE"));
        assert_eq!(cart.cost, CartCost::zero("EUR"));
    }

    #[test]
    fn test_set_cart_replaces_wholesale() {
        let mut server = Cart::empty("USD");
        server.id = Some("gid://shopify/Cart/xyz".to_string());
        server.checkout_url = Some("https://shop.example.com/checkout".to_string());
        server.total_quantity = 99;

        let cart = apply(
            Some(&scenario_a()),
            CartAction::SetCart {
                cart: server.clone(),
            },
        );
        assert_eq!(cart, server);
    }

    #[test]
    fn test_unknown_action_returns_current() {
        let cart = scenario_a();
        assert_eq!(apply(Some(&cart), CartAction::Unknown), cart);
        assert_eq!(apply(None, CartAction::Unknown), Cart::empty("USD"));
    }

    #[test]
    fn test_previous_snapshot_untouched() {
        let cart = scenario_a();
        let before = cart.clone();
        let _ = apply(Some(&cart), CartAction::ClearCart);
        let _ = apply(Some(&cart), CartAction::remove("gidA"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_zero_quantity_line_does_not_divide_by_zero() {
        let mut cart = scenario_a();
        cart.lines[0].quantity = 0;
        let cart = apply(
            Some(&cart),
            CartAction::update("gidA", UpdateType::Increment, None),
        );
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.lines[0].cost.total_amount, Money::zero("USD"));
    }
}
