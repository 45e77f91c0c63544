//! Login Use Case
//!
//! Authenticates a user and creates an in-memory session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::generate_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialRepository, SessionStore, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_id: String,
    pub user_name: String,
}

/// Login use case
pub struct LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionStore,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> LoginUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionStore,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_store: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_store,
            config,
        }
    }

    /// Authenticate and open a session.
    ///
    /// Unknown user name and wrong password both surface as
    /// `InvalidCredentials`; the response never reveals which check failed.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credential not found".to_string()))?;

        // Verify password
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let password_valid = credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // Create session
        let session = Session::new(
            user.user_id,
            user.user_name.to_string(),
            self.config.session_ttl_chrono(),
        );
        self.session_store.insert(&session).await?;

        let session_token = generate_session_token(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_id: user.user_id.to_string(),
            user_name: user.user_name.to_string(),
        })
    }
}
