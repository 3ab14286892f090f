//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Currency every cart total and catalog price is expressed in.
pub const STORE_CURRENCY: &Currency = GBP;

/// Errors raised while parsing a price string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The string was not of the form `AMOUNT CURRENCY`.
    #[error("invalid price format: {0}")]
    InvalidFormat(String),

    /// The currency code is not one we trade in.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The amount was below zero.
    #[error("price cannot be negative: {0}")]
    Negative(String),
}

/// Parse a price string (e.g. `"12.50 GBP"`) into a [`Money`] value.
///
/// # Errors
///
/// Returns an error if the string is not in the format `AMOUNT CURRENCY`, if the amount is not a
/// decimal, if it is negative, or if the currency code is not recognised.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, PriceError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PriceError::InvalidFormat(format!(
            "expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidFormat(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(s.to_string()));
    }

    let currency = match code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(PriceError::UnknownCurrency(other.to_string())),
    };

    Ok(Money::from_decimal(amount, currency))
}

/// Convert a decimal amount to minor units (pence), rounding half away from zero.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
}

/// Format an amount in the store currency for display, e.g. `£25.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{:.2}", STORE_CURRENCY.symbol, amount.round_dp(2))
}
