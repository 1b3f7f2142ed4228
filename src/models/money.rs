//! Exact currency amounts
//!
//! Amounts are whole cents in an `i64`, so summing a long history never
//! drifts. Only shares and percentages are computed in floating point.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CENTS_PER_UNIT: i64 = 100;

/// A signed amount of money in cents
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

/// Why a string could not be read as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid amount '{0}'")]
    Invalid(String),

    #[error("Amount '{0}' has more than two decimal places")]
    TooPrecise(String),
}

impl Money {
    /// An amount of `cents` hundredths
    ///
    /// ```
    /// use financeflow::models::Money;
    /// assert_eq!(Money::from_cents(1990).to_string(), "19.90");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// An amount of whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Read an amount typed by a user or found in a file
    ///
    /// A leading `-` and a `R$` or `$` prefix are allowed, and a comma may
    /// stand in for the decimal point: `"19.90"`, `"R$ 19,90"`, `"-5"`.
    /// Digits after the separator are capped at two.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = ["R$", "$"]
            .iter()
            .find_map(|symbol| rest.strip_prefix(symbol))
            .unwrap_or(rest)
            .trim_start();

        if rest.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::Invalid(input.trim().to_string());
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        let (whole, fraction) = match rest.split_once(['.', ',']) {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if !whole.is_empty() && !digits(whole) {
            return Err(invalid());
        }
        if !fraction.is_empty() && !digits(fraction) {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.trim().to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Render with a currency symbol: `R$ 19.90`, `-R$ 2.50`
    pub fn format_with_symbol(self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!(
            "{}{} {}.{:02}",
            sign,
            symbol,
            magnitude / CENTS_PER_UNIT as u64,
            magnitude % CENTS_PER_UNIT as u64
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            magnitude / CENTS_PER_UNIT as u64,
            magnitude % CENTS_PER_UNIT as u64
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1990).format_with_symbol("R$"), "R$ 19.90");
        assert_eq!(Money::from_units(2162).format_with_symbol("R$"), "R$ 2162.00");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$ 2.50");
    }

    #[test]
    fn test_parse_accepted_forms() {
        let cases = [
            ("19.90", 1990),
            ("19,90", 1990),
            ("R$19.90", 1990),
            ("R$ 19,90", 1990),
            ("$ 3", 300),
            ("-10.50", -1050),
            ("-R$ 1,5", -150),
            ("850", 85_000),
            (".75", 75),
            ("4.", 400),
            ("  120.00  ", 12_000),
        ];
        for (input, cents) in cases {
            assert_eq!(Money::parse(input).unwrap().cents(), cents, "input {input:?}");
        }
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("R$"), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(Money::parse("1.x5"), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(
            Money::parse("1.999"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let rent = Money::from_units(850);
        let food = Money::from_cents(12_050);

        assert_eq!((rent + food).cents(), 97_050);
        assert_eq!((food - rent).cents(), -72_950);
        assert_eq!(-food, Money::from_cents(-12_050));

        let amounts = [rent, food, Money::from_cents(50)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, by_value);
        assert_eq!(by_value.cents(), 97_100);
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "1050");
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), Money::from_cents(1050));
    }
}
