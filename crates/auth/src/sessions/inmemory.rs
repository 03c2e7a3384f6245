//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wayfare_core::auth::{Result, Role, Session, SessionId, SessionRepository};

/// In-memory session store.
///
/// Sessions live in a HashMap wrapped in `Arc<RwLock<_>>` and are lost on
/// restart, which matches the server-side-session model: users simply log
/// in again.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates a new empty session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.as_str().to_string(), session.clone());
        Ok(())
    }

    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id.as_str()).cloned())
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
        Ok(())
    }

    async fn delete_account_sessions(&self, account_id: i64, role: Role) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| s.account_id != account_id || s.role != role);
        Ok(())
    }
}
