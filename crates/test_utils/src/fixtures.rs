//! Pre-built test fixtures
//!
//! Ready-to-use test data for common entities. The time fixtures are
//! pinned instants rather than the wall clock: the domain takes time as a
//! parameter, so tests stay deterministic by always starting from the
//! same "now".

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Money, MovieId, Rate};
use domain_customer::{LicenseTerm, LoyaltyPolicy, Movie};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a validated amount, panicking on fixture bugs
    pub fn dollars(amount: Decimal) -> Money {
        Money::new(amount).expect("fixture amount is valid")
    }

    /// The default promotion threshold amount
    pub fn threshold() -> Money {
        Self::dollars(dec!(100))
    }

    /// A typical movie price
    pub fn movie_price() -> Money {
        Self::dollars(dec!(9.99))
    }

    /// The zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for temporal test data
pub struct TimeFixtures;

impl TimeFixtures {
    /// The pinned "now" deterministic tests start from (Jun 15, 2024)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// An instant far enough in the past that any rental has lapsed
    pub fn long_ago() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    /// `days` after the pinned now
    pub fn days_later(days: i64) -> DateTime<Utc> {
        Self::now() + Duration::days(days)
    }

    /// `days` before the pinned now
    pub fn days_earlier(days: i64) -> DateTime<Utc> {
        Self::now() - Duration::days(days)
    }
}

/// Fixture for catalog test data
pub struct MovieFixtures;

impl MovieFixtures {
    /// A movie owned outright once purchased
    pub fn perpetual(title: &str, price: Decimal) -> Movie {
        Movie::new(
            MovieId::new(),
            title,
            MoneyFixtures::dollars(price),
            LicenseTerm::Perpetual,
        )
    }

    /// A rental that lapses `days` after purchase
    pub fn rental(title: &str, price: Decimal, days: u32) -> Movie {
        Movie::new(
            MovieId::new(),
            title,
            MoneyFixtures::dollars(price),
            LicenseTerm::Limited { days },
        )
    }
}

/// Fixture for loyalty policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// The default policy (threshold 100.00, discount 25%, 365 days)
    pub fn standard() -> LoyaltyPolicy {
        LoyaltyPolicy::default()
    }

    /// Standard policy with a custom promotion threshold
    pub fn with_threshold(threshold: Decimal) -> LoyaltyPolicy {
        LoyaltyPolicy {
            promotion_threshold: MoneyFixtures::dollars(threshold),
            ..LoyaltyPolicy::default()
        }
    }

    /// Standard policy with a custom discount percentage
    pub fn with_discount_percent(percent: Decimal) -> LoyaltyPolicy {
        LoyaltyPolicy {
            advanced_discount: Rate::from_percentage(percent),
            ..LoyaltyPolicy::default()
        }
    }

    /// Standard policy with a custom advanced status duration
    pub fn with_status_days(days: u32) -> LoyaltyPolicy {
        LoyaltyPolicy {
            advanced_status_days: days,
            ..LoyaltyPolicy::default()
        }
    }
}
