//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - User registration/login with username + password
//! - In-process sessions with HMAC-signed cookie tokens
//! - Authorization gate that redirects unauthenticated requests to `/login`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored in clear
//! - Login failures are indistinguishable between unknown username and
//!   wrong password
//! - Session tokens are signed; a forged or truncated token never reaches
//!   the session store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemorySessionStore;
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{CurrentUser, GateState, require_session};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
