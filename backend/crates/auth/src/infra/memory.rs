//! In-Memory Session Store
//!
//! Sessions are held in a process-local map and are lost on restart; a
//! surviving cookie then simply fails validation and the user logs in again.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// In-memory session store
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (for diagnostics)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;
        // Only update sessions that still exist; a concurrent logout wins
        if let Some(existing) = sessions.get_mut(&session.session_id) {
            *existing = session.clone();
        }
        Ok(())
    }

    async fn remove(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }
}
