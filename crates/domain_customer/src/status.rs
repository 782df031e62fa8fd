//! Loyalty status state machine
//!
//! Two states: `Regular` and `Advanced`. The only explicit transition is
//! `Regular -> Advanced` via a successful promotion; the way back is a
//! lapse, observed lazily through [`LoyaltyStatus::is_advanced`] once the
//! expiration instant has passed. Nothing ever writes the lapse back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Loyalty status of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoyaltyStatus {
    /// The default status every customer starts with
    #[default]
    Regular,
    /// Discounted status, in force until `expires_at`
    Advanced { expires_at: DateTime<Utc> },
}

impl LoyaltyStatus {
    /// True while the status is `Advanced` and not yet expired as of `now`
    pub fn is_advanced(&self, now: DateTime<Utc>) -> bool {
        matches!(self, LoyaltyStatus::Advanced { expires_at } if *expires_at > now)
    }

    /// The expiration instant, if the status carries one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            LoyaltyStatus::Regular => None,
            LoyaltyStatus::Advanced { expires_at } => Some(*expires_at),
        }
    }
}
