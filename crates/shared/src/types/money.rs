//! Currency codes and decimal helpers for statement amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts and ratios are `rust_decimal::Decimal`; spreadsheet numbers are
//! converted through their shortest decimal representation exactly once,
//! at the input boundary.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// ISO 4217 currency codes supported for statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Chinese Yuan
    #[default]
    Cny,
    /// Hong Kong Dollar
    Hkd,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cny => write!(f, "CNY"),
            Self::Hkd => write!(f, "HKD"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CNY" | "RMB" => Ok(Self::Cny),
            "HKD" => Ok(Self::Hkd),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Converts a spreadsheet number into a decimal amount.
///
/// Uses the shortest round-trip representation of the float, so `0.1`
/// becomes exactly `0.1`.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for NaN, infinities, and values outside
/// the decimal range.
pub fn amount_from_number(value: f64) -> AppResult<Decimal> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "non-finite number {value}"
        )));
    }
    Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::from_scientific(&format!("{value:e}")))
        .map(|d| d.normalize())
        .map_err(|e| AppError::InvalidInput(format!("number {value} out of range: {e}")))
}

/// Parses a textual amount such as `"12,345.60"` or `"-800"`.
///
/// Surrounding whitespace and thousands separators are ignored.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when the text is not a decimal number.
pub fn parse_amount(text: &str) -> AppResult<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '，' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(AppError::InvalidInput("empty amount".to_string()));
    }

    Decimal::from_str(&cleaned)
        .map(|d| d.normalize())
        .map_err(|e| AppError::InvalidInput(format!("'{text}' is not a number: {e}")))
}

/// Formats a ratio as a percentage with one decimal place (`0.652` → `65.2%`).
#[must_use]
pub fn format_percent(ratio: Decimal) -> String {
    match ratio.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{:.1}%", percent.round_dp(1)),
        None => format!("{ratio}x"),
    }
}
