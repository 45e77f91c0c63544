//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, GateState, require_session};
pub use router::{auth_router, auth_router_generic};
