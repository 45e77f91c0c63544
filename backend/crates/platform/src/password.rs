//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//! - Optional application-wide pepper
//!
//! The policy is deliberately permissive about length: the service accepts
//! whatever passphrase the user registered with, and only rejects input that
//! cannot be meaningfully hashed (empty, control characters, or beyond the
//! Argon2 input bound).

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures password data is securely erased from memory when dropped.
/// Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Unicode is normalized using NFKC before validation so that the same
    /// passphrase typed on different platforms hashes identically.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Control characters would indicate a mangled request body
        for ch in normalized.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = self.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => self.as_bytes().to_vec(),
        };

        // Random 128-bit salt per hash
        let salt = SaltString::generate(OsRng);

        // Argon2id with default (OWASP-recommended) parameters
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Stores the Argon2id hash in PHC format, which embeds the algorithm
/// identifier, parameters, and salt. Safe to persist and log-free to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC hash string loaded from storage
    pub fn from_phc_string(hash: String) -> Self {
        Self { hash }
    }

    /// Get the PHC hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a clear text password against this hash
    ///
    /// The pepper must match the one used at hashing time.
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = password.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => password.as_bytes().to_vec(),
        };

        Ok(Argon2::default()
            .verify_password(&password_bytes, &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = ClearTextPassword::new("pw1".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None).unwrap());

        let wrong = ClearTextPassword::new("pw2".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None).unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = ClearTextPassword::new("secret-passphrase".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert_ne!(hashed.as_str(), "secret-passphrase");
        assert!(!hashed.as_str().contains("secret-passphrase"));
        assert!(hashed.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_pepper_changes_verification() {
        let password = ClearTextPassword::new("with pepper".to_string()).unwrap();
        let hashed = password.hash(Some(b"app-pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"app-pepper")).unwrap());
        assert!(!hashed.verify(&password, None).unwrap());
        assert!(!hashed.verify(&password, Some(b"other-pepper")).unwrap());
    }

    #[test]
    fn test_salting_produces_distinct_hashes() {
        let password = ClearTextPassword::new("same password".to_string()).unwrap();
        let h1 = password.hash(None).unwrap();
        let h2 = password.hash(None).unwrap();
        assert_ne!(h1.as_str(), h2.as_str());
    }

    #[test]
    fn test_policy_rejects_empty() {
        assert_eq!(
            ClearTextPassword::new("".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_policy_rejects_control_characters() {
        assert_eq!(
            ClearTextPassword::new("pass\u{0007}word".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_policy_rejects_too_long() {
        let long = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            ClearTextPassword::new(long).unwrap_err(),
            PasswordPolicyError::TooLong { .. }
        ));
    }

    #[test]
    fn test_short_passwords_are_accepted() {
        // No minimum length: existing accounts registered short passphrases
        assert!(ClearTextPassword::new("pw1".to_string()).is_ok());
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("visible".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("visible"));
        assert!(debug.contains("REDACTED"));
    }
}
