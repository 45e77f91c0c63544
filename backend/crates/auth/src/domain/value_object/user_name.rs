//! User Name Value Object
//!
//! A username is the public handle a user registers, logs in, and is
//! displayed under.
//!
//! ## Invariants
//! - Stored exactly as entered: comparisons and uniqueness are
//!   case-sensitive, no normalization or lowercasing
//! - Not empty, no surrounding whitespace
//! - At most 64 characters
//! - No control characters

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for a username (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid characters")]
    InvalidCharacter,

    #[error("Username cannot start or end with whitespace")]
    SurroundingWhitespace,
}

/// Username, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Validate and wrap a username
    pub fn new(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(UserNameError::Empty);
        }
        if raw.trim() != raw {
            return Err(UserNameError::SurroundingWhitespace);
        }
        if raw.trim().is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if raw.chars().any(|c| c.is_control()) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    /// Wrap a username loaded from storage (already validated at write time)
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Bob_42").is_ok());
        assert!(UserName::new("名前").is_ok());
    }

    #[test]
    fn test_case_is_preserved() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        // Different casing is a different username
        assert_ne!(name, UserName::new("alice").unwrap());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert_eq!(
            UserName::new(" alice").unwrap_err(),
            UserNameError::SurroundingWhitespace
        );
        assert_eq!(
            UserName::new("alice ").unwrap_err(),
            UserNameError::SurroundingWhitespace
        );
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "x".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(long).unwrap_err(),
            UserNameError::TooLong { .. }
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            UserName::new("ali\u{0000}ce").unwrap_err(),
            UserNameError::InvalidCharacter
        );
    }

    #[test]
    fn test_display() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.to_string(), "alice");
    }
}
