//! Currency amounts and cent arithmetic.
//!
//! Amounts travel as `f64` with two decimals. Anything that has to add up
//! exactly is computed in whole cents first.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::PlannerError;

pub(crate) fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub(crate) fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Round an amount to currency precision (2 decimals).
pub fn round_currency(amount: f64) -> f64 {
    from_cents(to_cents(amount))
}

/// Currency label for a plan. No conversion happens between currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Lkr,
    Usd,
    Eur,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Lkr, Currency::Usd, Currency::Eur, Currency::Inr];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Lkr => "LKR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }

    /// Format as `CODE 1,234.56`
    pub fn format(self, amount: f64) -> String {
        format!("{} {}", self.code(), group_thousands(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                PlannerError::invalid_input(
                    "currency",
                    format!("unsupported currency `{code}` (expected LKR, USD, EUR or INR)"),
                )
            })
    }
}

fn group_thousands(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_conversion() {
        assert_eq!(to_cents(333.333), 33333);
        assert_eq!(to_cents(12.5), 1250);
        assert_eq!(from_cents(33333), 333.33);
        assert_eq!(round_currency(1000.0 / 3.0), 333.33);
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(Currency::Usd.format(1234567.891), "USD 1,234,567.89");
        assert_eq!(Currency::Lkr.format(150000.0), "LKR 150,000.00");
        assert_eq!(Currency::Eur.format(999.5), "EUR 999.50");
        assert_eq!(Currency::Inr.format(0.0), "INR 0.00");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        let err = "GBP".parse::<Currency>().unwrap_err();
        assert_eq!(err.field(), Some("currency"));
    }
}
