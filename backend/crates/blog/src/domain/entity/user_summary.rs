//! User Summary
//!
//! The slice of a user the blog domain needs for listings and attribution.
//! The full user entity belongs to the auth domain; the blog side only ever
//! reads it through the `UserDirectory` trait.

use crate::domain::value_object::UserId;

/// Minimal user projection for listings
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub user_id: UserId,
    pub user_name: String,
}
