//! Check Session Use Case
//!
//! Verifies a session token and retrieves the live session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }

    /// Get the session, update its activity, and slide the expiration
    ///
    /// An expired session is removed from the store before the error is
    /// returned, so it cannot be revived by later requests.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = parse_session_token(session_token, &self.config.session_secret)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_store
            .find(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_store.remove(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();
        if let Some(ttl) = self.config.session_ttl_chrono() {
            session.renew(ttl);
        }

        // Update activity in the background; a failed update only costs the
        // sliding renewal, not the request
        let session_clone = session.clone();
        let store = self.session_store.clone();
        tokio::spawn(async move {
            if let Err(e) = store.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
