//! Line and cart total recomputation.
//!
//! Totals are always derived from the lines, never adjusted incrementally:
//! `total_quantity` is the sum of line quantities, `total_amount` the sum of
//! line totals. Subtotal mirrors the total and tax is pinned to zero, since
//! discounts and tax are computed by the commerce platform.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use pineapple_cart_core::{Cart, CartCost, CartItem, Money, ProductVariant};

/// Fewest decimal places a rescaled line total is written with.
pub const MIN_AMOUNT_SCALE: u32 = 2;

/// Parsed line total, with unreadable amounts counted as zero.
#[must_use]
pub fn line_amount(line: &CartItem) -> Decimal {
    match line.cost.total_amount.decimal() {
        Ok(amount) => amount,
        Err(e) => {
            warn!(
                merchandise_id = %line.merchandise.id,
                error = %e,
                "Unreadable line total, counting it as zero"
            );
            Decimal::ZERO
        }
    }
}

/// Sum of line quantities.
#[must_use]
pub fn total_quantity(lines: &[CartItem]) -> i64 {
    lines
        .iter()
        .fold(0_i64, |acc, line| acc.saturating_add(line.quantity))
}

/// Sum of line totals.
#[must_use]
pub fn total_amount(lines: &[CartItem]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line_amount(line)))
}

/// Cart cost for a set of lines.
///
/// The currency comes from the first line, or `fallback_currency` when there
/// are none.
#[must_use]
pub fn cart_cost(lines: &[CartItem], fallback_currency: &str) -> CartCost {
    let currency = lines
        .first()
        .map_or(fallback_currency, |line| {
            line.cost.total_amount.currency_code.as_str()
        });
    let total = Money::from_decimal(total_amount(lines), currency);

    CartCost {
        subtotal_amount: total.clone(),
        total_amount: total,
        total_tax_amount: Money::zero(currency),
    }
}

/// Recompute `total_quantity` and `cost` from the cart's lines.
///
/// An empty cart gets zero totals in the currency it already had.
pub fn refresh(cart: &mut Cart) {
    if cart.lines.is_empty() {
        let currency = cart.currency_code().to_string();
        cart.total_quantity = 0;
        cart.cost = CartCost::zero(&currency);
        return;
    }

    cart.total_quantity = total_quantity(&cart.lines);
    cart.cost = cart_cost(&cart.lines, cart.currency_code());
}

/// Line total for `quantity` units of a variant at its current price.
#[must_use]
pub fn variant_line_total(variant: &ProductVariant, quantity: i64) -> Money {
    variant.price.times(quantity).unwrap_or_else(|e| {
        warn!(
            merchandise_id = %variant.id,
            error = %e,
            "Cannot price variant, using a zero line total"
        );
        Money::zero(variant.price.currency_code.clone())
    })
}

/// Line total for a new quantity at the line's existing unit price.
///
/// The unit price is inferred as `total / quantity`, so it does not change
/// when only the quantity does. The result is rounded to the previous
/// total's decimal places, but never to fewer than [`MIN_AMOUNT_SCALE`], so
/// `"20"` at quantity 3 becomes `"13.33"` at quantity 2. A line whose stored
/// quantity is not positive has no inferable unit price and gets a zero total.
#[must_use]
pub fn rescaled_line_total(line: &CartItem, new_quantity: i64) -> Money {
    let currency = line.cost.total_amount.currency_code.clone();

    if line.quantity <= 0 {
        warn!(
            merchandise_id = %line.merchandise.id,
            quantity = line.quantity,
            "Line has no positive quantity to infer a unit price from"
        );
        return Money::zero(currency);
    }

    let previous = line_amount(line);
    let scale = previous.scale().max(MIN_AMOUNT_SCALE);

    let rescaled = previous
        .checked_mul(Decimal::from(new_quantity))
        .and_then(|amount| amount.checked_div(Decimal::from(line.quantity)));

    match rescaled {
        Some(amount) => {
            let mut amount =
                amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            amount.rescale(scale);
            Money::from_decimal(amount, currency)
        }
        None => {
            warn!(
                merchandise_id = %line.merchandise.id,
                new_quantity,
                "Line total overflowed, keeping previous total"
            );
            line.cost.total_amount.clone()
        }
    }
}
