//! Type-safe monetary amounts using decimal arithmetic.
//!
//! The upstream catalog serves prices as floating-point numbers. Converting
//! them to [`rust_decimal::Decimal`] at the boundary keeps line-item totals
//! free of cent-level drift when many lines are accumulated.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when converting a raw price into [`Money`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MoneyError {
    /// The raw price is negative.
    #[error("price cannot be negative: {0}")]
    Negative(f64),
    /// The raw price is NaN or infinite.
    #[error("price is not a finite number: {0}")]
    NotFinite(f64),
}

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Create an amount from a whole number of minor units (e.g., cents).
    #[must_use]
    pub fn from_minor_units(units: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(units, 2), currency_code)
    }

    /// Convert a raw floating-point price, failing fast on values that have
    /// no meaning as a price.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NotFinite`] for NaN or infinite input and
    /// [`MoneyError::Negative`] for negative input.
    pub fn from_f64(value: f64, currency_code: CurrencyCode) -> Result<Self, MoneyError> {
        let amount = Decimal::from_f64(value).ok_or(MoneyError::NotFinite(value))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(value));
        }
        Ok(Self::new(amount, currency_code))
    }

    /// Multiply by a unit count, e.g. a cart line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code for the currency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(format!("unsupported currency code: {s}")),
        }
    }
}
