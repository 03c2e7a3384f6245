//! Shared auth state.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};

use wayfare_core::auth::{
    calculate_expiry, generate_session_id, Role, Session, SessionId, SessionRepository,
};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Shared state for session handling, embedded in the server's app state.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionRepository>,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(sessions: Arc<dyn SessionRepository>, config: AuthConfig) -> Self {
        Self { sessions, config }
    }

    /// Opens a session for an account and returns the cookie to set.
    ///
    /// Any existing sessions for the account are dropped first, matching
    /// the fresh-login semantics of clearing prior session state.
    pub async fn open_session(
        &self,
        account_id: i64,
        role: Role,
        display_name: &str,
    ) -> Result<(Session, Cookie<'static>), AuthError> {
        self.sessions.delete_account_sessions(account_id, role).await?;

        let now = Utc::now();
        let session = Session {
            id: generate_session_id(),
            account_id,
            role,
            display_name: display_name.to_string(),
            created_at: now,
            expires_at: calculate_expiry(
                now,
                Duration::seconds(self.config.session_ttl.as_secs() as i64),
            ),
        };
        self.sessions.create_session(&session).await?;

        let cookie = Cookie::build((self.config.cookie_name.clone(), session.id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.config.cookie_secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(
                self.config.session_ttl.as_secs() as i64,
            ))
            .build();

        Ok((session, cookie))
    }

    /// Deletes a session by id. Missing sessions are not an error.
    pub async fn close_session(&self, id: &SessionId) -> Result<(), AuthError> {
        self.sessions.delete_session(id).await?;
        Ok(())
    }

    /// Cookie that removes the session cookie from the client.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::from(self.config.cookie_name.clone());
        cookie.set_path("/");
        cookie
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
