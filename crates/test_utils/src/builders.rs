//! Test data builders
//!
//! Builders construct aggregates through their real operations so a built
//! customer never violates an invariant: spend is seeded with an actual
//! (long-expired) purchase and promotion goes through `promote`.

use domain_customer::Customer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{MovieFixtures, PolicyFixtures, TimeFixtures};

/// Builder for constructing test customers with sensible defaults
pub struct CustomerBuilder {
    name: String,
    email: String,
    spend: Decimal,
    promoted: bool,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            spend: dec!(0),
            promoted: false,
        }
    }

    /// Sets the customer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the customer email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Seeds the customer with lifetime spend
    ///
    /// The spend comes from a single long-expired rental purchase, so it
    /// never collides with movies a test purchases afterwards.
    pub fn with_spend(mut self, spend: Decimal) -> Self {
        self.spend = spend;
        self
    }

    /// Promotes the customer as of the pinned test "now"
    pub fn promoted(mut self) -> Self {
        self.promoted = true;
        self
    }

    /// Builds the customer, draining any seeding events
    pub fn build(self) -> Customer {
        let mut customer =
            Customer::register(&self.name, &self.email).expect("builder inputs are valid");

        if self.spend > dec!(0) {
            let seed = MovieFixtures::rental("Spend Seed", self.spend, 1);
            customer
                .purchase_movie(&seed, &PolicyFixtures::standard(), TimeFixtures::long_ago())
                .expect("seed purchase is valid");
        }

        if self.promoted {
            customer
                .promote(&PolicyFixtures::with_threshold(dec!(0)), TimeFixtures::now())
                .expect("promotion with zero threshold always succeeds");
        }

        customer.take_events();
        customer
    }
}
