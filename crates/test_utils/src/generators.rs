//! Property-based test generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;

/// Strategy for valid customer names (1 to 100 characters, no padding)
pub fn customer_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ']{0,98}[A-Za-z]|[A-Za-z]")
        .expect("name regex is valid")
}

/// Strategy for names that exceed the maximum length after trimming
pub fn overlong_name_strategy() -> impl Strategy<Value = String> {
    (101usize..=150).prop_map(|len| "x".repeat(len))
}

/// Strategy for valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,12}@[a-z0-9]{1,12}\\.[a-z]{2,3}")
        .expect("email regex is valid")
}

/// Strategy for valid amounts in whole cents
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    0i64..=100_000_000i64
}

/// Strategy for realistic movie prices in whole cents
pub fn price_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..=5_000i64
}
