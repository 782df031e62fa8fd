//! Custom test assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use chrono::{DateTime, Utc};
use core_kernel::{Money, MovieId};
use domain_customer::Customer;
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given decimal amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "money mismatch: actual={}, expected={}",
        actual.amount(),
        expected
    );
}

/// Asserts that a customer's lifetime spend equals the given amount
pub fn assert_spent(customer: &Customer, expected: Decimal) {
    assert_eq!(
        customer.money_spent().amount(),
        expected,
        "spend mismatch for {}: actual={}, expected={}",
        customer.id(),
        customer.money_spent().amount(),
        expected
    );
}

/// Asserts that a customer actively owns the given movie as of `now`
pub fn assert_owns_active(customer: &Customer, movie_id: MovieId, now: DateTime<Utc>) {
    assert!(
        customer
            .purchases()
            .iter()
            .any(|record| record.movie_id() == movie_id && record.is_active(now)),
        "expected customer {} to actively own movie {} at {}",
        customer.id(),
        movie_id,
        now
    );
}

/// Asserts that the advanced status is in force and expires at the given instant
pub fn assert_advanced_until(customer: &Customer, expected_expiry: DateTime<Utc>) {
    assert_eq!(
        customer.status().expires_at(),
        Some(expected_expiry),
        "expected customer {} to hold the advanced status until {}",
        customer.id(),
        expected_expiry
    );
}
