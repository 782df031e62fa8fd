//! Customer Domain
//!
//! This crate holds the decision logic of the movie rental system: the
//! validated value objects (name, email), the `Customer` aggregate with
//! its purchase and promotion rules, and the loyalty status state
//! machine. Everything here is pure in-memory computation; persistence
//! and transport are collaborators behind the [`ports::CustomerPort`]
//! trait.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use rust_decimal_macros::dec;
//! use core_kernel::{Money, MovieId};
//! use domain_customer::{Customer, LicenseTerm, LoyaltyPolicy, Movie};
//!
//! let mut customer = Customer::register("Alice Example", "alice@example.com").unwrap();
//!
//! let movie = Movie::new(
//!     MovieId::new(),
//!     "Night Train",
//!     Money::new(dec!(9.99)).unwrap(),
//!     LicenseTerm::Perpetual,
//! );
//! let policy = LoyaltyPolicy::default();
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//!
//! customer.purchase_movie(&movie, &policy, now).unwrap();
//! assert_eq!(customer.money_spent(), Money::new(dec!(9.99)).unwrap());
//! assert!(!customer.is_advanced(now));
//! ```

pub mod customer;
pub mod email;
pub mod error;
pub mod events;
pub mod movie;
pub mod name;
pub mod policy;
pub mod ports;
pub mod purchase;
pub mod status;

pub use customer::Customer;
pub use email::Email;
pub use error::{CustomerError, ValidationError};
pub use events::CustomerEvent;
pub use movie::{LicenseTerm, Movie};
pub use name::{CustomerName, MAX_NAME_LENGTH};
pub use policy::LoyaltyPolicy;
pub use ports::CustomerPort;
pub use purchase::PurchaseRecord;
pub use status::LoyaltyStatus;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCustomerPort;
