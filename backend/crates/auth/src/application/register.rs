//! Register Use Case
//!
//! Creates a new user account with hashed credentials.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: String,
    pub user_name: String,
}

/// Register use case
pub struct RegisterUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<U, C> RegisterUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(user_repo: Arc<U>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate user name
        let user_name = UserName::new(input.user_name)
            .map_err(|e| AuthError::UserNameValidation(e.to_string()))?;

        // Check if user name is taken. The unique constraint still backs
        // this up if a concurrent registration wins the race.
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create user and credentials
        let user = User::new(user_name);
        let credential = Credential::new(user.user_id, password_hash);

        // Persist
        self.user_repo.create(&user).await?;
        self.credential_repo.create(&credential).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
            user_name: user.user_name.to_string(),
        })
    }
}
