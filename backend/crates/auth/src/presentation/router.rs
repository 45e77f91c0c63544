//! Auth Router
//!
//! Public routes only; the gate middleware for protected routes is applied
//! by the binary when it assembles the full application.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, SessionStore, UserRepository};
use crate::infra::memory::MemorySessionStore;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL repository and in-memory
/// session store
pub fn auth_router(
    repo: PgAuthRepository,
    sessions: MemorySessionStore,
    config: AuthConfig,
) -> Router {
    auth_router_generic(repo, sessions, config)
}

/// Create a generic Auth router for any repository/store implementation
pub fn auth_router_generic<R, S>(repo: R, sessions: S, config: AuthConfig) -> Router
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::landing))
        .route(
            "/register",
            get(handlers::register_page).post(handlers::register::<R, S>),
        )
        .route(
            "/login",
            get(handlers::login_page).post(handlers::login::<R, S>),
        )
        .route("/logout", get(handlers::logout::<R, S>))
        .with_state(state)
}
