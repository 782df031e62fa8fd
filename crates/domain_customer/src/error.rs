//! Customer domain errors
//!
//! All failures are typed values. `ValidationError` covers malformed input
//! to the value types; `CustomerError` covers the aggregate's business
//! rules and wraps validation failures transparently.

use core_kernel::{Money, MoneyError};
use thiserror::Error;

/// Errors produced when validating raw input into a value type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name was empty or whitespace-only
    #[error("customer name should not be empty")]
    EmptyName,

    /// Name exceeded the maximum length after trimming
    #[error("customer name is longer than {max} characters")]
    NameTooLong { max: usize },

    /// Email was empty or whitespace-only
    #[error("customer email should not be empty")]
    EmptyEmail,

    /// Email did not have the `local@domain` shape
    #[error("email is invalid: {0}")]
    MalformedEmail(String),

    /// A money amount was out of range or not a whole number of cents
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Errors produced by the customer aggregate's operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// Input validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Purchase attempted for a movie that is still actively owned
    #[error("the movie is already purchased: {movie}")]
    AlreadyOwned { movie: String },

    /// Promotion attempted while the advanced status is still in force
    #[error("the customer already has the advanced status")]
    AlreadyAdvanced,

    /// Promotion attempted below the spend threshold
    #[error("money spent {actual} is below the promotion threshold of {required}")]
    InsufficientSpend { required: Money, actual: Money },

    /// Signaled by callers when a second customer would share an email
    #[error("email is already in use: {0}")]
    DuplicateEmail(String),
}

impl CustomerError {
    /// Creates an AlreadyOwned error for the given movie title
    pub fn already_owned(movie: impl Into<String>) -> Self {
        CustomerError::AlreadyOwned {
            movie: movie.into(),
        }
    }

    /// Creates a DuplicateEmail error
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        CustomerError::DuplicateEmail(email.into())
    }
}
