//! API DTOs (Data Transfer Objects)
//!
//! Registration and login accept classic `application/x-www-form-urlencoded`
//! bodies; field names match the HTML form inputs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Registration form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Pages
// ============================================================================

/// Response for GET endpoints that back a form or landing page; carries the
/// data a UI needs to render it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub page: &'static str,
}

impl PageResponse {
    pub fn new(page: &'static str) -> Self {
        Self { page }
    }
}
