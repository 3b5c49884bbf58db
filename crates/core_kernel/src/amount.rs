//! Claim amounts with precise decimal arithmetic
//!
//! Claim amounts come from a single-currency billing extract, so unlike a
//! general money type there is no currency attached. Arithmetic is done on
//! `rust_decimal::Decimal` so totals over many rows never drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when reading or combining amounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// A claim amount as billed by the hospital
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimAmount(Decimal);

impl ClaimAmount {
    /// Creates a new amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Lossy conversion used for chart geometry only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Parses a CSV cell.
    ///
    /// Blank cells are a missing amount (`Ok(None)`). Thousands separators
    /// are accepted, so `"1,250.50"` reads as `1250.50`.
    pub fn parse_cell(raw: &str) -> Result<Option<Self>, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }

    /// Arithmetic mean of `total` over `count` values, `None` when there are none
    pub fn mean(total: ClaimAmount, count: usize) -> Option<ClaimAmount> {
        if count == 0 {
            return None;
        }
        Some(Self(total.0 / Decimal::from(count)))
    }

    /// Formats the amount rounded to whole units with comma thousands
    /// separators, e.g. `1234567.5` becomes `"1,234,568"`.
    ///
    /// Rounding is half to even.
    pub fn to_grouped_string(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl FromStr for ClaimAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
        Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .map(Self)
            .map_err(|_| AmountError::InvalidAmount(s.to_string()))
    }
}

impl From<Decimal> for ClaimAmount {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for ClaimAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for ClaimAmount {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl AddAssign for ClaimAmount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for ClaimAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a ClaimAmount> for ClaimAmount {
    fn sum<I: Iterator<Item = &'a ClaimAmount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
