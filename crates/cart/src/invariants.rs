//! Consistency checks for cart snapshots.
//!
//! Every cart the engine produces from engine-produced input passes
//! [`check`]. Carts that arrive through `SetCart` are taken as-is, so this is
//! also how callers find out whether a server or file cart is self-consistent.

use std::collections::HashSet;

use rust_decimal::Decimal;

use pineapple_cart_core::{Cart, Money, MoneyError};

use crate::totals;

/// One way a cart fails to be consistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A line exists with quantity below 1.
    #[error("line {merchandise_id} has non-positive quantity {quantity}")]
    NonPositiveQuantity {
        /// Variant ID of the line.
        merchandise_id: String,
        /// The stored quantity.
        quantity: i64,
    },
    /// Two lines share a merchandise ID.
    #[error("merchandise {0} appears on more than one line")]
    DuplicateMerchandise(String),
    /// `total_quantity` is not the sum of line quantities.
    #[error("total quantity is {actual}, lines sum to {expected}")]
    TotalQuantityMismatch {
        /// Sum of line quantities.
        expected: i64,
        /// Stored total.
        actual: i64,
    },
    /// `cost.total_amount` is not the sum of line totals.
    #[error("total amount is {actual}, lines sum to {expected}")]
    TotalAmountMismatch {
        /// Sum of line totals.
        expected: Decimal,
        /// Stored total.
        actual: String,
    },
    /// `cost.subtotal_amount` differs from `cost.total_amount`.
    #[error("subtotal {subtotal} differs from total {total}")]
    SubtotalMismatch {
        /// Stored subtotal.
        subtotal: String,
        /// Stored total.
        total: String,
    },
    /// An amount could not be read.
    #[error("{field}: {error}")]
    UnreadableAmount {
        /// Where the amount lives.
        field: String,
        /// Why it could not be read.
        error: MoneyError,
    },
}

/// List every invariant the cart breaks. An empty list means consistent.
#[must_use]
pub fn check(cart: &Cart) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for line in &cart.lines {
        let merchandise_id = &line.merchandise.id;

        if line.quantity < 1 {
            violations.push(Violation::NonPositiveQuantity {
                merchandise_id: merchandise_id.clone(),
                quantity: line.quantity,
            });
        }

        if !seen.insert(merchandise_id.as_str()) {
            violations.push(Violation::DuplicateMerchandise(merchandise_id.clone()));
        }

        if let Err(error) = line.cost.total_amount.decimal() {
            violations.push(Violation::UnreadableAmount {
                field: format!("lines[{merchandise_id}].cost.total_amount"),
                error,
            });
        }
    }

    let expected_quantity = totals::total_quantity(&cart.lines);
    if expected_quantity != cart.total_quantity {
        violations.push(Violation::TotalQuantityMismatch {
            expected: expected_quantity,
            actual: cart.total_quantity,
        });
    }

    let expected_amount = totals::total_amount(&cart.lines);
    let total = read(&cart.cost.total_amount, "cost.total_amount", &mut violations);
    let subtotal = read(
        &cart.cost.subtotal_amount,
        "cost.subtotal_amount",
        &mut violations,
    );

    if total.is_some_and(|total| total != expected_amount) {
        violations.push(Violation::TotalAmountMismatch {
            expected: expected_amount,
            actual: cart.cost.total_amount.amount.clone(),
        });
    }

    if matches!((total, subtotal), (Some(total), Some(subtotal)) if total != subtotal) {
        violations.push(Violation::SubtotalMismatch {
            subtotal: cart.cost.subtotal_amount.amount.clone(),
            total: cart.cost.total_amount.amount.clone(),
        });
    }

    violations
}

fn read(money: &Money, field: &str, violations: &mut Vec<Violation>) -> Option<Decimal> {
    match money.decimal() {
        Ok(amount) => Some(amount),
        Err(error) => {
            violations.push(Violation::UnreadableAmount {
                field: field.to_string(),
                error,
            });
            None
        }
    }
}
