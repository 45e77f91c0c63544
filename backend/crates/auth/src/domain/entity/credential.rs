//! Credential Entity
//!
//! Authentication credentials for a user.
//! Separated from User entity to isolate sensitive data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password (PHC string, never the clear text)
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Create new credentials
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
