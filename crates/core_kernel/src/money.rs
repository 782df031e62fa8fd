//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of dollar amounts
//! using rust_decimal for precise calculations without floating-point errors.
//! Amounts are validated on construction: non-negative, bounded, and
//! representable in whole cents.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest amount the system will represent
pub const MAX_DOLLAR_AMOUNT: Decimal = dec!(1_000_000);

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("dollar amount cannot be negative: {0}")]
    Negative(Decimal),

    #[error("dollar amount cannot be greater than {max}: {amount}")]
    ExceedsMaximum { amount: Decimal, max: Decimal },

    #[error("dollar amount cannot contain a fraction of a cent: {0}")]
    SubCentPrecision(Decimal),
}

/// A validated dollar amount
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Every constructor and every arithmetic operation revalidates the
/// result, so a `Money` value is always in `[0, 1_000_000]` with at most
/// two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rejecting out-of-range amounts
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        if amount > MAX_DOLLAR_AMOUNT {
            return Err(MoneyError::ExceedsMaximum {
                amount,
                max: MAX_DOLLAR_AMOUNT,
            });
        }
        if amount.normalize().scale() > 2 {
            return Err(MoneyError::SubCentPrecision(amount));
        }
        Ok(Self { amount })
    }

    /// Creates Money from an integer amount of cents
    pub fn from_minor(cents: i64) -> Result<Self, MoneyError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checked addition that revalidates the upper bound
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        Self::new(self.amount + other.amount)
    }

    /// Checked subtraction that rejects a negative result
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        Self::new(self.amount - other.amount)
    }

    /// Multiplies by a scalar, rounding to whole cents
    ///
    /// Uses banker's rounding (round half to even) before revalidating the
    /// result against the amount bounds.
    pub fn scale(&self, factor: Decimal) -> Result<Money, MoneyError> {
        let product = (self.amount * factor)
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven);
        Self::new(product)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.amount)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::new(amount).map_err(serde::de::Error::custom)
    }
}

/// Represents a percentage rate (e.g. the advanced-status discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g. 0.25 for 25%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g. 0.25 for 25%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g. 25.0 for 25%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// The zero rate
    pub fn zero() -> Self {
        Self { value: dec!(0) }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to a money amount, rounding to whole cents
    pub fn apply(&self, money: &Money) -> Result<Money, MoneyError> {
        money.scale(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50)).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_rejects_negative() {
        assert_eq!(
            Money::new(dec!(-0.01)),
            Err(MoneyError::Negative(dec!(-0.01)))
        );
    }

    #[test]
    fn test_money_rejects_sub_cent() {
        assert!(matches!(
            Money::new(dec!(1.005)),
            Err(MoneyError::SubCentPrecision(_))
        ));
    }

    #[test]
    fn test_money_bounds_are_inclusive() {
        assert!(Money::new(dec!(0)).is_ok());
        assert!(Money::new(MAX_DOLLAR_AMOUNT).is_ok());
        assert!(matches!(
            Money::new(dec!(1_000_000.01)),
            Err(MoneyError::ExceedsMaximum { .. })
        ));
    }

    #[test]
    fn test_trailing_zeros_are_not_sub_cent() {
        assert!(Money::new(dec!(1.100)).is_ok());
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_checked_add_is_addition() {
        let a = Money::new(dec!(100.00)).unwrap();
        let b = Money::new(dec!(50.00)).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_respects_maximum() {
        let a = Money::new(dec!(999_999.99)).unwrap();
        let b = Money::new(dec!(0.02)).unwrap();
        assert!(matches!(
            a.checked_add(&b),
            Err(MoneyError::ExceedsMaximum { .. })
        ));
    }

    #[test]
    fn test_checked_sub_rejects_negative_result() {
        let a = Money::new(dec!(10.00)).unwrap();
        let b = Money::new(dec!(10.01)).unwrap();
        assert!(matches!(a.checked_sub(&b), Err(MoneyError::Negative(_))));
    }

    #[test]
    fn test_scale_rounds_to_cents() {
        let m = Money::new(dec!(9.99)).unwrap();
        // 9.99 * 0.75 = 7.4925, banker's rounding lands on 7.49
        assert_eq!(m.scale(dec!(0.75)).unwrap().amount(), dec!(7.49));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(25.0));
        let amount = Money::new(dec!(1000.00)).unwrap();
        assert_eq!(rate.apply(&amount).unwrap().amount(), dec!(250.00));
    }

    #[test]
    fn test_display() {
        let m = Money::new(dec!(12.5)).unwrap();
        assert_eq!(m.to_string(), "$12.50");
        assert_eq!(Rate::from_percentage(dec!(25)).to_string(), "25%");
    }
}
