use async_trait::async_trait;

use super::{AuthError, Role, Session, SessionId};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Session storage abstraction.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session.
    async fn create_session(&self, session: &Session) -> Result<()>;

    /// Retrieve session by ID.
    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>>;

    /// Delete a specific session.
    async fn delete_session(&self, id: &SessionId) -> Result<()>;

    /// Delete all sessions for an account (fresh-login semantics).
    ///
    /// User and admin ids come from separate tables and can collide, so an
    /// account is identified by id and role together.
    async fn delete_account_sessions(&self, account_id: i64, role: Role) -> Result<()>;
}
