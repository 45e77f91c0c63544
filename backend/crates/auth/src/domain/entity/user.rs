//! User Entity
//!
//! Core user profile entity. Users are immutable after registration:
//! there is no update or delete operation anywhere in the domain.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// User entity
///
/// Sensitive auth data is in the Credential entity.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, case-sensitive, for login and display)
    pub user_name: UserName,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let a = User::new(UserName::new("alice").unwrap());
        let b = User::new(UserName::new("alice").unwrap());
        assert_ne!(a.user_id, b.user_id);
    }
}
