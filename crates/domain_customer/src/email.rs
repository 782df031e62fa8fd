//! Email value object

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;

/// A customer's email address
///
/// Trimmed and non-empty, with exactly one `@` separating a non-empty
/// local part from a non-empty domain. Equality and hashing are
/// case-insensitive; the stored value keeps its original casing.
///
/// Uniqueness across customers is enforced at the repository boundary,
/// using this type's equality.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates a raw string into an email address
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        let mut parts = trimmed.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(ValidationError::MalformedEmail(trimmed.to_owned())),
        }
    }

    /// Returns the validated address
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_lowercase().hash(state);
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Email::new(&raw).map_err(serde::de::Error::custom)
    }
}
