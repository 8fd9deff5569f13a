//! Validated name newtypes for heroes
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (PersonName, Alias)
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// PersonName
// ============================================================================

/// A validated civilian name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Create a new validated person name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Name", name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> String {
        name.0
    }
}

// ============================================================================
// Alias
// ============================================================================

/// A validated hero alias, the public-facing display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

impl Alias {
    /// Create a new validated alias.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the alias is empty or too long.
    pub fn new(alias: impl Into<String>) -> Result<Self, DomainError> {
        validated("Hero name", alias.into()).map(Self)
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Alias {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Alias> for String {
    fn from(alias: Alias) -> String {
        alias.0
    }
}

fn validated(label: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", label)));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            label, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod person_name {
        use super::*;

        #[test]
        fn valid_name_is_trimmed() {
            let name = PersonName::new("  Clark Kent  ").unwrap();
            assert_eq!(name.as_str(), "Clark Kent");
        }

        #[test]
        fn empty_name_is_rejected() {
            assert!(PersonName::new("").is_err());
            assert!(PersonName::new("   ").is_err());
        }

        #[test]
        fn overlong_name_is_rejected() {
            let long = "x".repeat(MAX_NAME_LENGTH + 1);
            let err = PersonName::new(long).unwrap_err();
            assert!(err.to_string().contains("cannot exceed"));
        }

        #[test]
        fn deserialize_rejects_empty() {
            let result: Result<PersonName, _> = serde_json::from_str(r#""""#);
            assert!(result.is_err());
        }
    }

    mod alias {
        use super::*;

        #[test]
        fn valid_alias() {
            let alias = Alias::new("Superman").unwrap();
            assert_eq!(alias.to_string(), "Superman");
        }

        #[test]
        fn empty_alias_reports_hero_name() {
            let err = Alias::new("").unwrap_err();
            assert_eq!(err.to_string(), "Validation failed: Hero name cannot be empty");
        }
    }
}
