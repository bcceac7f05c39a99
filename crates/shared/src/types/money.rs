//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g., quetzales).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "GTQ", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Guatemalan Quetzal
    #[default]
    Gtq,
    /// US Dollar
    Usd,
    /// Mexican Peso
    Mxn,
    /// Euro
    Eur,
}

impl Currency {
    /// Returns the symbol printed in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gtq => "Q",
            Self::Usd | Self::Mxn => "$",
            Self::Eur => "€",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Renders as `Q 1,234.56`: symbol, space, grouped amount with two decimals.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.currency.symbol(),
            format_grouped(self.amount, 2)
        )
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gtq => write!(f, "GTQ"),
            Self::Usd => write!(f, "USD"),
            Self::Mxn => write!(f, "MXN"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GTQ" => Ok(Self::Gtq),
            "USD" => Ok(Self::Usd),
            "MXN" => Ok(Self::Mxn),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Formats a decimal with comma thousands separators and exactly
/// `decimal_places` fractional digits, rounding half away from zero.
///
/// Values that round to zero never carry a minus sign.
#[must_use]
pub fn format_grouped(value: Decimal, decimal_places: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", decimal_places as usize, rounded.abs());

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Gtq);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Gtq);
    }

    #[rstest]
    #[case(dec!(0), "Q 0.00")]
    #[case(dec!(600), "Q 600.00")]
    #[case(dec!(1234.5), "Q 1,234.50")]
    #[case(dec!(-30), "Q -30.00")]
    #[case(dec!(1234567.891), "Q 1,234,567.89")]
    #[case(dec!(0.005), "Q 0.01")]
    #[case(dec!(-0.004), "Q 0.00")]
    fn test_money_display(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount, Currency::Gtq).to_string(), expected);
    }

    #[test]
    fn test_money_display_other_currencies() {
        assert_eq!(Money::new(dec!(5), Currency::Usd).to_string(), "$ 5.00");
        assert_eq!(Money::new(dec!(5), Currency::Eur).to_string(), "€ 5.00");
    }

    #[rstest]
    #[case(dec!(100), 0, "100")]
    #[case(dec!(1000), 0, "1,000")]
    #[case(dec!(999999.5), 0, "1,000,000")]
    #[case(dec!(-0.125), 4, "-0.1250")]
    #[case(dec!(-0.0833333333), 4, "-0.0833")]
    #[case(dec!(12.3), 2, "12.30")]
    fn test_format_grouped(#[case] value: Decimal, #[case] places: u32, #[case] expected: &str) {
        assert_eq!(format_grouped(value, places), expected);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Gtq.to_string(), "GTQ");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Mxn.to_string(), "MXN");
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("GTQ").unwrap(), Currency::Gtq);
        assert_eq!(Currency::from_str("gtq").unwrap(), Currency::Gtq);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("MXN").unwrap(), Currency::Mxn);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_default_currency_is_quetzal() {
        assert_eq!(Currency::default(), Currency::Gtq);
    }
}
