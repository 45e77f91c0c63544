//! Session Entity
//!
//! Represents an authenticated user session. Sessions live only in process
//! memory (behind a `SessionStore`); the client holds a signed token that
//! references the session by id. A restart drops all sessions.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4), referenced by the signed cookie token
    pub session_id: Uuid,
    /// Authenticated user
    pub user_id: UserId,
    /// Display name, denormalized to avoid a user lookup per request
    pub user_name: String,
    /// Expiration (Unix timestamp ms); `None` means the session never
    /// expires and lives until logout or process restart
    pub expires_at_ms: Option<i64>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL comes from the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, user_name: String, ttl: Option<Duration>) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            user_name,
            expires_at_ms: ttl.map(|ttl| (now + ttl).timestamp_millis()),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        match self.expires_at_ms {
            Some(deadline) => Utc::now().timestamp_millis() > deadline,
            None => false,
        }
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Sliding expiration: re-arm the deadline from now
    ///
    /// No-op for sessions created without a TTL.
    pub fn renew(&mut self, ttl: Duration) {
        if self.expires_at_ms.is_some() {
            self.expires_at_ms = Some((Utc::now() + ttl).timestamp_millis());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_without_ttl_never_expires() {
        let session = Session::new(UserId::new(), "alice".to_string(), None);
        assert_eq!(session.expires_at_ms, None);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_with_ttl_expires() {
        let mut session = Session::new(UserId::new(), "alice".to_string(), Some(Duration::hours(1)));
        assert!(!session.is_expired());

        // Force the deadline into the past
        session.expires_at_ms = Some(Utc::now().timestamp_millis() - 1_000);
        assert!(session.is_expired());
    }

    #[test]
    fn test_renew_rearms_deadline() {
        let mut session = Session::new(UserId::new(), "alice".to_string(), Some(Duration::hours(1)));
        session.expires_at_ms = Some(Utc::now().timestamp_millis() - 1_000);
        session.renew(Duration::hours(1));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_renew_is_noop_without_ttl() {
        let mut session = Session::new(UserId::new(), "alice".to_string(), None);
        session.renew(Duration::hours(1));
        assert_eq!(session.expires_at_ms, None);
    }
}
