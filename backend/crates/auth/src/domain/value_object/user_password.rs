//! User Password Value Object
//!
//! Domain value objects for passwords. Delegates cryptographic operations
//! to `platform::password`.
//!
//! ## Security
//! - Argon2id hashing (memory-hard)
//! - Automatic memory zeroization of clear text
//! - Unicode NFKC normalization before hashing
//! - Optional application-wide pepper

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Stored password hash (PHC string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Wrap a PHC hash string loaded from storage
    pub fn from_db(hash: String) -> Self {
        Self(HashedPassword::from_phc_string(hash))
    }

    /// Verify a raw password against this hash
    pub fn verify(
        &self,
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        self.0.verify(raw.inner(), pepper)
    }

    /// Get the PHC hash string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_and_verify() {
        let raw = RawPassword::new("pw1".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        assert!(stored.verify(&raw, None).unwrap());

        let other = RawPassword::new("pw2".to_string()).unwrap();
        assert!(!stored.verify(&other, None).unwrap());
    }

    #[test]
    fn test_stored_value_is_a_hash() {
        let raw = RawPassword::new("hunter2".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();
        assert_ne!(stored.as_str(), "hunter2");
        assert!(stored.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_debug_redacted() {
        let raw = RawPassword::new("visible".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("visible"));
    }
}
