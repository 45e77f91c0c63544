//! HTTP Handlers
//!
//! Browser-facing auth endpoints. Successful POST flows answer with a
//! 303 redirect (register → login, login → home, logout → landing), the
//! way a form-driven UI expects; failures surface through `AuthError`.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{CredentialRepository, SessionStore, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, PageResponse, RegisterForm};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, S>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Landing
// ============================================================================

/// GET /
pub async fn landing() -> Json<PageResponse> {
    Json(PageResponse::new("landing"))
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page() -> Json<PageResponse> {
    Json(PageResponse::new("register"))
}

/// POST /register
///
/// No auto-login: the fresh account still has to go through /login.
pub async fn register<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Form(form): Form<RegisterForm>,
) -> AuthResult<Redirect>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: form.username,
        password: form.password,
    };

    use_case.execute(input).await?;

    Ok(Redirect::to("/login"))
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page() -> Json<PageResponse> {
    Json(PageResponse::new("login"))
}

/// POST /login
pub async fn login<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = LoginInput {
        user_name: form.username,
        password: form.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.session_cookie().build_set_cookie(&output.session_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to("/home"),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Always clears the cookie and lands back on `/`, even when the token was
/// already invalid.
pub async fn logout<R, S>(
    State(state): State<AuthAppState<R, S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = LogoutUseCase::new(state.sessions.clone(), state.config.clone());
        use_case.execute(&token).await?;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")))
}
