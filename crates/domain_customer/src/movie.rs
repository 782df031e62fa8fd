//! Catalog data consumed by the customer aggregate
//!
//! The catalog is an external collaborator; the customer domain only reads
//! these snapshots and never owns or mutates catalog state.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{Money, MovieId};
use serde::{Deserialize, Serialize};

/// How long a purchased movie remains watchable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseTerm {
    /// The customer owns the movie outright
    Perpetual,
    /// The purchase lapses a fixed number of days after it was made
    Limited { days: u32 },
}

impl LicenseTerm {
    /// Expiration instant for a purchase made at `purchased_at`
    ///
    /// `None` means the purchase never expires.
    pub fn expires_at(&self, purchased_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            LicenseTerm::Perpetual => None,
            LicenseTerm::Limited { days } => Some(purchased_at + Duration::days(*days as i64)),
        }
    }
}

/// A movie as the catalog supplies it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Undiscounted price
    pub base_price: Money,
    /// Licensing terms applied to each purchase
    pub license: LicenseTerm,
}

impl Movie {
    /// Creates a new catalog snapshot
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        base_price: Money,
        license: LicenseTerm,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            base_price,
            license,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_perpetual_license_never_expires() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(LicenseTerm::Perpetual.expires_at(now), None);
    }

    #[test]
    fn test_limited_license_expires_after_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let expires = LicenseTerm::Limited { days: 2 }.expires_at(now).unwrap();
        assert_eq!(expires, now + Duration::days(2));
    }

    #[test]
    fn test_movie_construction() {
        let movie = Movie::new(
            MovieId::new(),
            "Night Train",
            Money::new(dec!(9.99)).unwrap(),
            LicenseTerm::Perpetual,
        );
        assert_eq!(movie.title, "Night Train");
    }
}
