//! Dollar amounts.
//!
//! [`Dollars`] is the unit of the target payment shape. It is validated once
//! at construction, so converting to cents afterwards cannot fail.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Number of cents in one dollar.
const CENTS_PER_DOLLAR: Decimal = Decimal::ONE_HUNDRED;

/// Errors that can occur when building a [`Dollars`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The floating point input was NaN or infinite.
    #[error("amount is not a finite number: {0}")]
    NotFinite(String),
    /// The amount was below zero.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount has no representation as a whole number of cents.
    #[error("amount is too large to express in cents: {0}")]
    TooLarge(String),
}

/// A non-negative amount of US dollars.
///
/// The whole-cent value is computed when the amount is built, using
/// half-away-from-zero rounding of `amount * 100`.
///
/// # Examples
///
/// ```rust
/// use structural_patterns::money::Dollars;
///
/// let total = Dollars::try_from(150.75).unwrap();
/// assert_eq!(total.to_cents(), 15_075);
/// assert_eq!(total.to_string(), "$150.75");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dollars {
    amount: Decimal,
    cents: i64,
}

impl Dollars {
    /// Zero dollars.
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
        cents: 0,
    };

    /// Builds an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Negative`] for amounts below zero and
    /// [`AmountError::TooLarge`] when the cent value does not fit in `i64`.
    pub fn new(amount: Decimal) -> Result<Self, AmountError> {
        if amount < Decimal::ZERO {
            return Err(AmountError::Negative(amount));
        }
        // Negative zero would display as "$-0.00".
        let amount = if amount.is_zero() { amount.abs() } else { amount };
        let cents = amount
            .checked_mul(CENTS_PER_DOLLAR)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_i64())
            .ok_or_else(|| AmountError::TooLarge(amount.to_string()))?;
        Ok(Self { amount, cents })
    }

    /// Builds an amount from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Negative`] when `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, AmountError> {
        let amount = Decimal::new(cents, 2);
        if cents < 0 {
            return Err(AmountError::Negative(amount));
        }
        Ok(Self { amount, cents })
    }

    /// The exact decimal amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The amount in whole cents, `round(amount * 100)`.
    pub const fn to_cents(&self) -> i64 {
        self.cents
    }

    /// Multiplies the amount by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::TooLarge`] when the product overflows.
    pub fn times(&self, quantity: u32) -> Result<Self, AmountError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| AmountError::TooLarge(format!("{} x {quantity}", self.amount)))
            .and_then(Self::new)
    }
}

impl TryFrom<f64> for Dollars {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value.to_string()));
        }
        let amount =
            Decimal::from_f64(value).ok_or_else(|| AmountError::TooLarge(value.to_string()))?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for Dollars {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "${:.2}", self.amount)
    }
}

impl Serialize for Dollars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.amount, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(150.75, 15_075)]
    #[case(89.99, 8_999)]
    #[case(0.29, 29)]
    #[case(0.0, 0)]
    #[case(25.0, 2_500)]
    fn test_cents_from_float(#[case] value: f64, #[case] expected: i64) {
        let dollars = Dollars::try_from(value).unwrap();
        assert_eq!(dollars.to_cents(), expected);
    }

    #[rstest]
    fn test_half_cent_rounds_away_from_zero() {
        let dollars = Dollars::new(Decimal::new(1_005, 3)).unwrap();
        assert_eq!(dollars.to_cents(), 101);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_rejected(#[case] value: f64) {
        assert!(matches!(
            Dollars::try_from(value),
            Err(AmountError::NotFinite(_))
        ));
    }

    #[rstest]
    fn test_negative_rejected() {
        assert_eq!(
            Dollars::try_from(-1.5),
            Err(AmountError::Negative(Decimal::new(-15, 1)))
        );
    }

    #[rstest]
    fn test_too_large_rejected() {
        assert!(matches!(
            Dollars::new(Decimal::MAX),
            Err(AmountError::TooLarge(_))
        ));
    }

    #[rstest]
    fn test_times_multiplies() {
        let price = Dollars::try_from(50.0).unwrap();
        assert_eq!(price.times(2).unwrap().to_cents(), 10_000);
    }

    #[rstest]
    fn test_display_has_two_decimals() {
        assert_eq!(Dollars::from_cents(8_999).unwrap().to_string(), "$89.99");
        assert_eq!(Dollars::try_from(150.0).unwrap().to_string(), "$150.00");
    }

    #[rstest]
    fn test_from_cents_rejects_negative() {
        assert!(Dollars::from_cents(-1).is_err());
    }

    #[rstest]
    fn test_negative_zero_is_plain_zero() {
        let from_float = Dollars::try_from(-0.0).unwrap();
        let from_decimal = Dollars::new(-Decimal::new(0, 2)).unwrap();

        assert_eq!(from_float.to_string(), "$0.00");
        assert_eq!(from_decimal.to_string(), "$0.00");
        assert!(!from_float.amount().is_sign_negative());
        assert_eq!(from_float.to_cents(), 0);
    }

    #[rstest]
    fn test_serializes_amount_as_decimal_string() {
        let dollars = Dollars::new(Decimal::new(15_075, 2)).unwrap();
        assert_eq!(serde_json::to_value(dollars).unwrap(), serde_json::json!("150.75"));
    }
}
