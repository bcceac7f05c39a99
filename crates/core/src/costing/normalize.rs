//! Input normalization and overflow-safe decimal arithmetic.
//!
//! Every scalar entering the engine is a [`RawNumber`] until [`normalize`]
//! turns it into a finite `Decimal`. Anything that is not a usable number
//! becomes exactly zero. The arithmetic helpers apply the same rule to
//! results that leave the decimal range, so no step of a computation can
//! panic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A scalar as typed into a form field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Field absent, `null`, or a non-scalar value.
    #[default]
    Missing,
    /// Integer literal.
    Integer(i64),
    /// Floating point literal, possibly NaN or infinite.
    Number(f64),
    /// Free text.
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RawNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawNumberVisitor)
    }
}

struct RawNumberVisitor;

impl<'de> Visitor<'de> for RawNumberVisitor {
    type Value = RawNumber;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        Ok(RawNumber::Missing)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(RawNumber::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or_else(|_| RawNumber::Text(value.to_string()), RawNumber::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(RawNumber::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(RawNumber::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(RawNumber::Text(value))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNumber::Missing)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNumber::deserialize(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNumber::Missing)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawNumber::Missing)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawNumber::Missing)
    }
}

/// Turns any raw scalar into a finite decimal. Never fails.
#[must_use]
pub fn normalize(raw: &RawNumber) -> Decimal {
    match raw {
        RawNumber::Missing => Decimal::ZERO,
        RawNumber::Integer(value) => Decimal::from(*value),
        RawNumber::Number(value) => normalize_f64(*value),
        RawNumber::Text(text) => normalize_text(text),
    }
}

/// NaN, infinities and values outside the decimal range become zero.
#[must_use]
pub fn normalize_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

/// Reads the longest numeric prefix of `text`, ignoring leading whitespace
/// and any trailing characters (`"12abc"` reads as 12).
#[must_use]
pub fn normalize_text(text: &str) -> Decimal {
    NumericPrefix::scan(text).map_or(Decimal::ZERO, |prefix| prefix.to_decimal())
}

/// Exponents beyond this magnitude overflow or underflow any decimal.
const EXPONENT_LIMIT: i64 = 64;

#[derive(Debug, PartialEq, Eq)]
struct NumericPrefix<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl<'a> NumericPrefix<'a> {
    fn scan(text: &'a str) -> Option<Self> {
        let text = text.trim_start();
        let bytes = text.as_bytes();
        let digits_from = |start: usize| {
            bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
                + start
        };

        let mut cursor = 0;
        let negative = match bytes.first() {
            Some(b'-') => {
                cursor = 1;
                true
            }
            Some(b'+') => {
                cursor = 1;
                false
            }
            _ => false,
        };

        let int_end = digits_from(cursor);
        let integer = &text[cursor..int_end];
        cursor = int_end;

        let mut fraction = "";
        if bytes.get(cursor) == Some(&b'.') {
            let frac_end = digits_from(cursor + 1);
            fraction = &text[cursor + 1..frac_end];
            cursor = frac_end;
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent = 0;
        if matches!(bytes.get(cursor), Some(b'e' | b'E')) {
            let mut exp_cursor = cursor + 1;
            let exp_negative = match bytes.get(exp_cursor) {
                Some(b'-') => {
                    exp_cursor += 1;
                    true
                }
                Some(b'+') => {
                    exp_cursor += 1;
                    false
                }
                _ => false,
            };
            let exp_end = digits_from(exp_cursor);
            if exp_end > exp_cursor {
                let magnitude = text[exp_cursor..exp_end]
                    .parse::<i64>()
                    .unwrap_or(i64::MAX)
                    .min(EXPONENT_LIMIT + 1);
                exponent = if exp_negative { -magnitude } else { magnitude };
            }
        }

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    fn to_decimal(&self) -> Decimal {
        let integer = if self.integer.is_empty() {
            "0"
        } else {
            self.integer
        };
        let literal = if self.fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{}", self.fraction)
        };

        let Ok(mut value) = Decimal::from_str(&literal) else {
            return Decimal::ZERO;
        };
        if value.is_zero() {
            return Decimal::ZERO;
        }

        if self.exponent > EXPONENT_LIMIT {
            return Decimal::ZERO;
        }
        if self.exponent < -EXPONENT_LIMIT {
            return Decimal::ZERO;
        }
        for _ in 0..self.exponent.unsigned_abs() {
            let scaled = if self.exponent > 0 {
                value.checked_mul(Decimal::TEN)
            } else {
                value.checked_div(Decimal::TEN)
            };
            match scaled {
                Some(next) => value = next,
                None => return Decimal::ZERO,
            }
        }

        if self.negative { -value } else { value }
    }
}

/// `a + b`, zero on overflow.
#[must_use]
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::ZERO)
}

/// `a - b`, zero on overflow.
#[must_use]
pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or(Decimal::ZERO)
}

/// `a * b`, zero on overflow.
#[must_use]
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

/// `numerator / denominator`, zero when the denominator is zero or the
/// quotient overflows.
#[must_use]
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Sum of `values`; zero when any partial sum overflows.
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .unwrap_or(Decimal::ZERO)
}
