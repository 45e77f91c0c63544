//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer: users and credentials in Postgres, sessions in
//! process memory.

use uuid::Uuid;

use crate::domain::entity::{credential::Credential, session::Session, user::User};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
///
/// Users are insert-only: there is no update or delete.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Returns `UserNameTaken` when the unique constraint on the username
    /// is violated, so a lost exists-then-create race still fails cleanly.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by user name (exact, case-sensitive match)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if a user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Create credentials for a user
    async fn create(&self, credential: &Credential) -> AuthResult<()>;

    /// Find credentials by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;
}

/// Session store trait
///
/// The store is injected into every request-handling context; there is no
/// ambient global session state.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Insert a new session
    async fn insert(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by ID
    async fn find(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update a session (activity timestamp, sliding expiration)
    async fn update(&self, session: &Session) -> AuthResult<()>;

    /// Remove a session; removing an absent session is not an error
    async fn remove(&self, session_id: Uuid) -> AuthResult<()>;
}
