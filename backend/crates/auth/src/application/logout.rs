//! Logout Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    /// Remove the session referenced by the token.
    ///
    /// Idempotent: an invalid token or an already-removed session is not an
    /// error, since the end state (no session) is the same either way.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Some(session_id) = parse_session_token(session_token, &self.config.session_secret)
        else {
            return Ok(());
        };

        self.session_store.remove(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");
        Ok(())
    }
}
