//! Loyalty policy configuration
//!
//! Promotion threshold, discount, and status duration are deployment
//! configuration, not business constants: every aggregate operation takes
//! the policy as a parameter and tests construct their own.

use chrono::Duration;
use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Loyalty rules the customer aggregate applies
#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyPolicy {
    /// Cumulative spend required before a customer can be promoted
    pub promotion_threshold: Money,
    /// Discount applied to purchases while the advanced status is in force
    pub advanced_discount: Rate,
    /// How many days the advanced status lasts once granted
    pub advanced_status_days: u32,
}

impl Default for LoyaltyPolicy {
    fn default() -> Self {
        Self {
            promotion_threshold: Money::new(dec!(100)).expect("default threshold is in range"),
            advanced_discount: Rate::from_percentage(dec!(25)),
            advanced_status_days: 365,
        }
    }
}

impl LoyaltyPolicy {
    /// Loads the policy from `LOYALTY_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LOYALTY"))
            .build()?
            .try_deserialize()
    }

    /// Duration the advanced status stays in force
    pub fn advanced_status_duration(&self) -> Duration {
        Duration::days(i64::from(self.advanced_status_days))
    }
}
