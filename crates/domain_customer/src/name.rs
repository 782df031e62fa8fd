//! Customer name value object

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;

/// Longest accepted customer name, in characters after trimming
pub const MAX_NAME_LENGTH: usize = 100;

/// A customer's display name
///
/// Trimmed, non-empty, and at most [`MAX_NAME_LENGTH`] characters. Two
/// names are equal when they match case-insensitively; the stored value
/// keeps its original casing.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Validates a raw string into a customer name
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for CustomerName {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for CustomerName {}

impl Hash for CustomerName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_lowercase().hash(state);
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CustomerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CustomerName::new(&raw).map_err(serde::de::Error::custom)
    }
}
