//! Immutable record of a single movie purchase

use chrono::{DateTime, Utc};
use core_kernel::{Money, MovieId};
use serde::{Deserialize, Serialize};

/// A snapshot of one purchase, produced only by the customer aggregate
///
/// Records are append-only: once created there is no mutation API, only
/// read accessors for reporting and the [`PurchaseRecord::is_active`]
/// predicate the aggregate uses to decide repurchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    movie_id: MovieId,
    movie_title: String,
    price: Money,
    purchased_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl PurchaseRecord {
    pub(crate) fn new(
        movie_id: MovieId,
        movie_title: String,
        price: Money,
        purchased_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            movie_id,
            movie_title,
            price,
            purchased_at,
            expires_at,
        }
    }

    /// The purchased movie's catalog identifier
    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    /// The movie title at the time of purchase
    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    /// The price actually charged
    pub fn price(&self) -> Money {
        self.price
    }

    /// When the purchase was made
    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    /// When the purchase lapses; `None` means perpetual ownership
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// True while the purchase still grants access as of `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires| expires > now)
    }
}
