//! Display formatting for report figures.
//!
//! Amounts are printed through [`Money`]; this module covers the other
//! figures the report shows.

use creperia_shared::types::{Currency, Money, format_grouped};
use rust_decimal::Decimal;

/// Heading for the month the report covers.
#[must_use]
pub fn period_label(period: Option<&str>) -> String {
    match period.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("MES DE {}", name.to_uppercase()),
        None => "MES EN CURSO".to_string(),
    }
}

/// Coefficients always show four decimals.
#[must_use]
pub fn format_coefficient(value: Decimal) -> String {
    format_grouped(value, 4)
}

/// Whole unit counts print without decimals, fractional ones with two.
#[must_use]
pub fn format_units(value: Decimal) -> String {
    let places = if value.fract().is_zero() { 0 } else { 2 };
    format_grouped(value, places)
}

/// Amount in `currency`, e.g. `Q 1,234.56`.
#[must_use]
pub fn format_amount(value: Decimal, currency: Currency) -> String {
    Money::new(value, currency).to_string()
}
