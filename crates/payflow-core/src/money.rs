//! # Money Value Object
//!
//! Immutable monetary amounts with currency-matching arithmetic.
//! Amounts are stored in the smallest currency unit (cents for USD) to
//! keep equality and summation exact.

use serde::{Deserialize, Serialize};

use crate::error::{PayError, PayResult};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, the others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit (cents, etc.)
    pub fn to_minor_units(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_minor_units(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable monetary amount in a single currency.
///
/// Fields are private so a negative amount can never be constructed;
/// every operation returns a new value, never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit (cents for USD)
    amount: i64,
    /// Currency
    currency: Currency,
}

impl Money {
    /// Create a new Money value from a decimal amount.
    ///
    /// Fails with `InvalidAmount` when the amount is negative.
    pub fn new(amount: f64, currency: Currency) -> PayResult<Self> {
        if amount < 0.0 {
            return Err(PayError::InvalidAmount { amount });
        }
        Ok(Self {
            amount: currency.to_minor_units(amount),
            currency,
        })
    }

    /// Create a Money value directly from minor units (cents)
    pub fn from_minor_units(amount: i64, currency: Currency) -> PayResult<Self> {
        if amount < 0 {
            return Err(PayError::InvalidAmount {
                amount: currency.from_minor_units(amount),
            });
        }
        Ok(Self { amount, currency })
    }

    /// A zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Add another Money value.
    ///
    /// Fails with `CurrencyMismatch` when the currencies differ.
    pub fn add(&self, other: Money) -> PayResult<Money> {
        if self.currency != other.currency {
            return Err(PayError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: other.currency.to_string(),
            });
        }
        Ok(Money {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Multiply by a scalar quantity
    pub fn scale(&self, factor: u32) -> Money {
        Money {
            amount: self.amount * factor as i64,
            currency: self.currency,
        }
    }

    /// Amount in smallest currency unit
    pub fn minor_units(&self) -> i64 {
        self.amount
    }

    /// Amount as a decimal value
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_minor_units(self.amount)
    }

    /// The currency of this amount
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.currency.decimal_places() == 0 {
            write!(f, "{} {}", self.currency, self.amount)
        } else {
            write!(f, "{} {:.2}", self.currency, self.as_decimal())
        }
    }
}
