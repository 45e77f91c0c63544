//! Blog (Content) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Posts, comments, repository traits
//! - `application/` - Content and query use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Post creation and deletion with a private flag
//! - Comments attributed to their author's username
//! - Per-user post listings and a directory of other authors
//!
//! ## Authorization Model
//! Every route expects the gate middleware upstream: handlers read the
//! authenticated identity from request extensions. Ownership and visibility
//! enforcement is governed by [`BlogConfig`]; the default enforces both, the
//! permissive preset keeps the historical open behavior where any
//! authenticated user could read or delete any post.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BlogConfig;
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blog_router, blog_router_generic};
