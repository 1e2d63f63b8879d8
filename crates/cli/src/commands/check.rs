//! Check a cart snapshot against the engine invariants.
//!
//! # Usage
//!
//! ```bash
//! np-cart check --cart cart.json
//! ```

use std::io::Write;
use std::path::Path;

use pineapple_cart::{Violation, check};
use pineapple_cart_core::Cart;

use super::{STDOUT, read_json};
use crate::error::CliError;

/// Write one line per violation, or `ok` when there are none.
pub fn report(violations: &[Violation], out: &mut impl Write) -> std::io::Result<()> {
    if violations.is_empty() {
        return writeln!(out, "ok");
    }
    for violation in violations {
        writeln!(out, "{violation}")?;
    }
    Ok(())
}

/// Load the cart, report its violations, and fail when there are any.
pub fn run(cart_path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let cart: Cart = read_json(cart_path)?;
    let violations = check(&cart);

    report(&violations, out).map_err(|e| CliError::io(STDOUT, e))?;

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvariantsViolated(violations.len()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pineapple_cart_core::{CartItem, CartItemCost, CartMerchandise, CartProduct, Money};

    fn line(id: &str, quantity: i64, total: &str) -> CartItem {
        CartItem {
            id: None,
            quantity,
            cost: CartItemCost {
                total_amount: Money::new(total, "USD"),
            },
            merchandise: CartMerchandise {
                id: id.to_string(),
                title: "Default".to_string(),
                selected_options: Vec::new(),
                product: CartProduct {
                    id: "p1".to_string(),
                    handle: "tee".to_string(),
                    title: "Tee".to_string(),
                    featured_image: None,
                },
            },
        }
    }

    fn write_cart(name: &str, cart: &Cart) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("np-cart-check-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, serde_json::to_string(cart).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_report_ok() {
        let mut out = Vec::new();
        report(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }

    #[test]
    fn test_run_consistent_cart() {
        let mut cart = Cart::empty("USD");
        cart.lines.push(line("v1", 2, "20.00"));
        cart.total_quantity = 2;
        cart.cost.subtotal_amount = Money::new("20.00", "USD");
        cart.cost.total_amount = Money::new("20.00", "USD");
        let path = write_cart("consistent.json", &cart);

        let mut out = Vec::new();
        run(&path, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }

    #[test]
    fn test_run_reports_violations() {
        let mut cart = Cart::empty("USD");
        cart.lines.push(line("v1", 0, "0.00"));
        cart.total_quantity = 5;
        let path = write_cart("broken.json", &cart);

        let mut out = Vec::new();
        let err = run(&path, &mut out).unwrap_err();

        assert!(matches!(err, CliError::InvariantsViolated(n) if n >= 2));
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), check(&cart).len());
    }
}
