//! Replay an action log against a cart.
//!
//! # Usage
//!
//! ```bash
//! # Start from an empty cart
//! np-cart replay --actions actions.json
//!
//! # Start from a saved snapshot, with a different default currency
//! np-cart replay --actions actions.json --cart cart.json --currency CAD
//! ```
//!
//! The actions file holds a JSON array of tagged actions, e.g.
//! `[{"type": "remove_item", "merchandise_id": "v1"}]`.

use std::io::Write;
use std::path::Path;

use pineapple_cart::{CartAction, CartEngine, CartStore};
use pineapple_cart_core::Cart;

use super::{STDOUT, read_json};
use crate::error::CliError;

/// Apply `actions` in order, starting from `cart`.
pub fn replay(engine: CartEngine, cart: Option<Cart>, actions: Vec<CartAction>) -> Cart {
    let mut store = CartStore::with_cart(engine, cart);

    for (index, action) in actions.into_iter().enumerate() {
        tracing::debug!(index, action = action.kind(), "Replaying action");
        store.dispatch(action);
    }

    store.snapshot()
}

/// Load the inputs, replay them, and write the resulting cart as JSON.
pub fn run(
    actions_path: &Path,
    cart_path: Option<&Path>,
    currency: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let actions: Vec<CartAction> = read_json(actions_path)?;
    let cart: Option<Cart> = cart_path.map(read_json).transpose()?;

    tracing::info!(
        actions = actions.len(),
        from_snapshot = cart.is_some(),
        "Replaying action log"
    );

    let result = replay(CartEngine::new(currency), cart, actions);

    let json = serde_json::to_string_pretty(&result).map_err(|e| CliError::json(STDOUT, e))?;
    writeln!(out, "{json}").map_err(|e| CliError::io(STDOUT, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pineapple_cart::UpdateType;
    use serde_json::json;

    fn actions() -> Vec<CartAction> {
        serde_json::from_value(json!([
            {
                "type": "add_item",
                "variant": {
                    "id": "v1",
                    "title": "Default",
                    "price": {"amount": "10.00", "currency_code": "USD"}
                },
                "product": {"id": "p1", "handle": "tee", "title": "Tee"},
                "quantity": 2
            },
            {"type": "update_item", "merchandise_id": "v1", "update_type": "increment"},
            {"type": "apply_discount", "code": "SAVE10"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_replay_from_empty() {
        let cart = replay(CartEngine::default(), None, actions());

        assert_eq!(cart.total_quantity, 3);
        assert_eq!(cart.cost.total_amount.amount, "30.00");
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn test_replay_from_snapshot() {
        let start = replay(CartEngine::default(), None, actions());
        let cart = replay(
            CartEngine::default(),
            Some(start),
            vec![CartAction::update("v1", UpdateType::SetExact, Some(1))],
        );

        assert_eq!(cart.total_quantity, 1);
        assert_eq!(cart.cost.total_amount.amount, "10.00");
    }

    #[test]
    fn test_replay_nothing_yields_empty_cart_in_currency() {
        let cart = replay(CartEngine::new("CAD"), None, Vec::new());

        assert!(cart.lines.is_empty());
        assert_eq!(cart.cost.total_amount.currency_code, "CAD");
    }

    #[test]
    fn test_run_writes_cart_json() {
        let dir = std::env::temp_dir().join(format!("np-cart-replay-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("actions.json");
        std::fs::write(&path, serde_json::to_string(&actions()).unwrap()).unwrap();

        let mut out = Vec::new();
        run(&path, None, "USD", &mut out).unwrap();

        let cart: Cart = serde_json::from_slice(&out).unwrap();
        assert_eq!(cart.total_quantity, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_run_missing_file() {
        let mut out = Vec::new();
        let err = run(Path::new("/nonexistent/actions.json"), None, "USD", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
