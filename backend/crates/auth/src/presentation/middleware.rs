//! Authorization Gate Middleware
//!
//! Composed onto the protected route set with `route_layer`. A request
//! without a valid session never reaches its handler: it is answered with a
//! 303 redirect to `/login`, not with data. On success the authenticated
//! identity is inserted into request extensions for handlers.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::user_id::UserId;

/// Authenticated identity, inserted into request extensions by the gate
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// Gate middleware state
#[derive(Clone)]
pub struct GateState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> GateState<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }
}

/// Middleware that requires a valid session
pub async fn require_session<S>(
    State(state): State<GateState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());

    let session = match token {
        Some(token) => use_case.get_session(&token).await.ok(),
        None => None,
    };

    let Some(session) = session else {
        return Redirect::to("/login").into_response();
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        user_name: session.user_name,
    });

    next.run(req).await
}
