//! Decimal payment amounts and their conversion to whole cents.
//!
//! Uses `rust_decimal` internally so that values such as `10.005` round
//! exactly instead of inheriting binary floating-point error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A payment amount in currency units (dollars).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use nacha_payroll::Amount;
///
/// let amount = Amount::from_str("123.45").unwrap();
/// assert_eq!(amount.to_cents(), Some(12345));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of minor-unit digits carried into NACHA amount fields.
    pub const CENTS_SCALE: u32 = 2;

    /// Converts to whole cents, rounding half away from zero.
    ///
    /// Returns `None` if the value does not fit in an `i64` number of cents.
    pub fn to_cents(&self) -> Option<i64> {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Parses a raw amount string and converts it to cents.
///
/// Blank, non-numeric and out-of-range inputs all return `None`.
pub fn parse_cents(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Amount::from_str(trimmed).ok()?.to_cents()
}
