//! Monetary amounts carried as decimal strings.
//!
//! Amounts travel between the storefront and the commerce platform as strings,
//! so nothing is lost at the boundary. Arithmetic is done on [`Decimal`] and the
//! result is written back as a string; no floating point is involved.
//!
//! ```
//! use pineapple_cart_core::Money;
//!
//! let price = Money::new("10.00", "USD");
//! let line = price.times(3).unwrap();
//! assert_eq!(line.amount, "30.00");
//! ```

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency used when a cart has no lines to take one from.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Errors that can occur when reading a [`Money`] amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The amount string is not a decimal number.
    #[error("invalid amount '{amount}': {reason}")]
    Invalid {
        /// The rejected amount.
        amount: String,
        /// Parser message.
        reason: String,
    },
    /// The amount is below zero.
    #[error("amount cannot be negative: {0}")]
    Negative(String),
    /// The result does not fit in a decimal.
    #[error("amount overflowed while computing {0}")]
    Overflow(String),
}

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a money value from an amount string and currency code.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// A zero amount (`"0"`) in the given currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new("0", currency_code)
    }

    /// Serialize a decimal back into a money value.
    #[must_use]
    pub fn from_decimal(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self::new(amount.to_string(), currency_code)
    }

    /// Parse the amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is empty, not a decimal number, or
    /// negative.
    pub fn decimal(&self) -> Result<Decimal, MoneyError> {
        let trimmed = self.amount.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let value = Decimal::from_str(trimmed).map_err(|e| MoneyError::Invalid {
            amount: self.amount.clone(),
            reason: e.to_string(),
        })?;

        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative(self.amount.clone()));
        }

        Ok(value)
    }

    /// Multiply this unit price by a quantity.
    ///
    /// The result keeps the price's decimal places, so `"10.00" × 2` is
    /// `"20.00"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be parsed or the product
    /// overflows.
    pub fn times(&self, quantity: i64) -> Result<Self, MoneyError> {
        let unit = self.decimal()?;
        let total = unit
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| MoneyError::Overflow(format!("{} x {quantity}", self.amount)))?;
        Ok(Self::from_decimal(total, self.currency_code.clone()))
    }

    /// Whether the amount parses to zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.decimal().is_ok_and(|d| d.is_zero())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}
