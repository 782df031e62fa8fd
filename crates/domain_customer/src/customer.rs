//! Customer aggregate root
//!
//! The Customer aggregate is the consistency boundary for purchases and
//! loyalty promotions. All state is private and mutated only through the
//! operations here, so the invariants hold at every observable point:
//!
//! - `money_spent` never decreases, and moves only together with a new
//!   purchase record
//! - a movie that is still actively owned cannot be purchased again
//! - the advanced status is only granted through a successful promotion
//!
//! Time is always an explicit parameter; the aggregate never reads the
//! ambient clock, which keeps every operation deterministic.

use chrono::{DateTime, Utc};
use core_kernel::{CustomerId, Money};
use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::error::{CustomerError, ValidationError};
use crate::events::CustomerEvent;
use crate::movie::Movie;
use crate::name::CustomerName;
use crate::policy::LoyaltyPolicy;
use crate::purchase::PurchaseRecord;
use crate::status::LoyaltyStatus;

/// The Customer aggregate root
///
/// # State machine
///
/// Loyalty follows a two-state machine:
///
/// - `Regular --promote--> Advanced { expires_at }`
/// - `Advanced --time passes--> Regular`, observed through
///   [`Customer::is_advanced`] rather than written back
///
/// Re-promotion after a lapse issues a fresh expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    id: CustomerId,
    /// Display name
    name: CustomerName,
    /// Contact email; unique per customer at the repository boundary
    email: Email,
    /// Lifetime spend, increased by every purchase
    money_spent: Money,
    /// Loyalty status
    status: LoyaltyStatus,
    /// Purchase history in purchase order
    purchases: Vec<PurchaseRecord>,
    /// Domain events to be published
    #[serde(skip)]
    events: Vec<CustomerEvent>,
}

impl Customer {
    /// Creates a customer from already-validated value objects
    pub fn new(id: CustomerId, name: CustomerName, email: Email) -> Self {
        Self {
            id,
            name,
            email,
            money_spent: Money::zero(),
            status: LoyaltyStatus::Regular,
            purchases: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Validates raw input and creates a customer with a fresh identifier
    ///
    /// Email uniqueness is the caller's responsibility; callers signal a
    /// collision with [`CustomerError::DuplicateEmail`] after consulting
    /// the repository.
    pub fn register(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = CustomerName::new(name)?;
        let email = Email::new(email)?;
        Ok(Self::new(CustomerId::new_v7(), name, email))
    }

    /// Returns the customer identifier
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Returns the email address
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the lifetime spend
    pub fn money_spent(&self) -> Money {
        self.money_spent
    }

    /// Returns the loyalty status
    pub fn status(&self) -> LoyaltyStatus {
        self.status
    }

    /// Returns the purchase history in purchase order
    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    /// True while the advanced status is in force as of `now`
    pub fn is_advanced(&self, now: DateTime<Utc>) -> bool {
        self.status.is_advanced(now)
    }

    /// Drains the events accumulated since the last drain
    pub fn take_events(&mut self) -> Vec<CustomerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replaces the display name
    ///
    /// # Errors
    ///
    /// Returns the validation failure if the new name is malformed; the
    /// aggregate is unchanged in that case.
    pub fn rename(&mut self, new_name: &str) -> Result<(), ValidationError> {
        let name = CustomerName::new(new_name)?;
        self.events.push(CustomerEvent::CustomerRenamed {
            customer_id: self.id,
            new_name: name.as_str().to_owned(),
        });
        self.name = name;
        Ok(())
    }

    /// Purchases a movie at `now`
    ///
    /// The price is the movie's base price, discounted by the policy's
    /// rate while the advanced status is in force. On success a new
    /// purchase record is appended and `money_spent` grows by exactly the
    /// charged price; the two commit together or not at all.
    ///
    /// # Errors
    ///
    /// - [`CustomerError::AlreadyOwned`] if an earlier purchase of the
    ///   same movie is perpetual or not yet expired as of `now`
    /// - [`CustomerError::Validation`] if pricing pushes an amount out of
    ///   the representable money range
    pub fn purchase_movie(
        &mut self,
        movie: &Movie,
        policy: &LoyaltyPolicy,
        now: DateTime<Utc>,
    ) -> Result<(), CustomerError> {
        let actively_owned = self
            .purchases
            .iter()
            .any(|record| record.movie_id() == movie.id && record.is_active(now));
        if actively_owned {
            return Err(CustomerError::already_owned(movie.title.clone()));
        }

        // Everything fallible happens before the first field is written.
        let price = self
            .charge_for(movie, policy, now)
            .map_err(ValidationError::from)?;
        let new_total = self
            .money_spent
            .checked_add(&price)
            .map_err(ValidationError::from)?;
        let record = PurchaseRecord::new(
            movie.id,
            movie.title.clone(),
            price,
            now,
            movie.license.expires_at(now),
        );

        self.purchases.push(record);
        self.money_spent = new_total;
        self.events.push(CustomerEvent::MoviePurchased {
            customer_id: self.id,
            movie_id: movie.id,
            price,
            purchased_at: now,
        });
        Ok(())
    }

    /// Promotes the customer to the advanced status
    ///
    /// # Errors
    ///
    /// - [`CustomerError::AlreadyAdvanced`] if the status is advanced and
    ///   not yet expired as of `now`
    /// - [`CustomerError::InsufficientSpend`] if the lifetime spend is
    ///   below the policy threshold
    pub fn promote(
        &mut self,
        policy: &LoyaltyPolicy,
        now: DateTime<Utc>,
    ) -> Result<(), CustomerError> {
        if self.status.is_advanced(now) {
            return Err(CustomerError::AlreadyAdvanced);
        }
        if self.money_spent < policy.promotion_threshold {
            return Err(CustomerError::InsufficientSpend {
                required: policy.promotion_threshold,
                actual: self.money_spent,
            });
        }

        let expires_at = now + policy.advanced_status_duration();
        self.status = LoyaltyStatus::Advanced { expires_at };
        self.events.push(CustomerEvent::CustomerPromoted {
            customer_id: self.id,
            expires_at,
        });
        Ok(())
    }

    fn charge_for(
        &self,
        movie: &Movie,
        policy: &LoyaltyPolicy,
        now: DateTime<Utc>,
    ) -> Result<Money, core_kernel::MoneyError> {
        if self.status.is_advanced(now) {
            let discount = policy.advanced_discount.apply(&movie.base_price)?;
            movie.base_price.checked_sub(&discount)
        } else {
            Ok(movie.base_price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::LicenseTerm;
    use chrono::{Duration, TimeZone};
    use core_kernel::MovieId;
    use rust_decimal_macros::dec;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn movie(price: rust_decimal::Decimal) -> Movie {
        Movie::new(
            MovieId::new(),
            "Night Train",
            Money::new(price).unwrap(),
            LicenseTerm::Perpetual,
        )
    }

    #[test]
    fn test_register_validates_both_fields() {
        assert!(Customer::register("", "alice@example.com").is_err());
        assert!(Customer::register("Alice", "not-an-email").is_err());
        let customer = Customer::register("Alice", "alice@example.com").unwrap();
        assert_eq!(customer.money_spent(), Money::zero());
        assert_eq!(customer.status(), LoyaltyStatus::Regular);
    }

    #[test]
    fn test_rename_replaces_name_only() {
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();
        customer.rename("  Alice Cooper ").unwrap();
        assert_eq!(customer.name().as_str(), "Alice Cooper");
        assert!(customer.purchases().is_empty());
    }

    #[test]
    fn test_rename_rejects_invalid_and_keeps_old_name() {
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();
        assert!(customer.rename("   ").is_err());
        assert_eq!(customer.name().as_str(), "Alice");
    }

    #[test]
    fn test_purchase_commits_record_and_spend_together() {
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();
        let movie = movie(dec!(9.99));

        customer
            .purchase_movie(&movie, &LoyaltyPolicy::default(), noon())
            .unwrap();

        assert_eq!(customer.purchases().len(), 1);
        assert_eq!(customer.money_spent().amount(), dec!(9.99));
        assert_eq!(customer.purchases()[0].price().amount(), dec!(9.99));
        assert_eq!(customer.purchases()[0].purchased_at(), noon());
    }

    #[test]
    fn test_failed_purchase_leaves_aggregate_unchanged() {
        let policy = LoyaltyPolicy::default();
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();
        customer
            .purchase_movie(&movie(dec!(1_000_000)), &policy, noon())
            .unwrap();

        // A second purchase would push lifetime spend past the money cap.
        let result = customer.purchase_movie(&movie(dec!(0.01)), &policy, noon());
        assert!(matches!(result, Err(CustomerError::Validation(_))));
        assert_eq!(customer.purchases().len(), 1);
        assert_eq!(customer.money_spent().amount(), dec!(1_000_000));
    }

    #[test]
    fn test_promote_requires_threshold_spend() {
        let policy = LoyaltyPolicy::default();
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();

        let result = customer.promote(&policy, noon());
        assert_eq!(
            result,
            Err(CustomerError::InsufficientSpend {
                required: policy.promotion_threshold,
                actual: Money::zero(),
            })
        );
    }

    #[test]
    fn test_events_accumulate_and_drain() {
        let policy = LoyaltyPolicy::default();
        let mut customer = Customer::register("Alice", "alice@example.com").unwrap();
        customer.rename("Alice Cooper").unwrap();
        customer
            .purchase_movie(&movie(dec!(100)), &policy, noon())
            .unwrap();
        customer.promote(&policy, noon()).unwrap();

        let events = customer.take_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], CustomerEvent::CustomerRenamed { .. }));
        assert!(matches!(events[1], CustomerEvent::MoviePurchased { .. }));
        assert!(matches!(
            &events[2],
            CustomerEvent::CustomerPromoted { expires_at, .. }
                if *expires_at == noon() + Duration::days(365)
        ));
        assert!(customer.take_events().is_empty());
    }
}
