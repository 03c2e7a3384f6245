//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;

use wayfare_core::auth::{is_session_expired, Role, Session, SessionId};

use crate::AuthState;

/// Extractor for an authenticated portal user. Returns 401 otherwise.
pub struct CurrentUser(pub Session);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = require_session(parts, state, Role::User).await?;
        Ok(CurrentUser(session))
    }
}

/// Extractor for an authenticated administrator. Returns 401 otherwise.
pub struct CurrentAdmin(pub Session);

impl<S> FromRequestParts<S> for CurrentAdmin
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = require_session(parts, state, Role::Admin).await?;
        Ok(CurrentAdmin(session))
    }
}

/// Extractor for an optionally authenticated user. Never rejects.
pub struct OptionalUser(pub Option<Session>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = match require_session(parts, state, Role::User).await {
            Ok(session) => Some(session),
            Err(_) => None,
        };
        Ok(OptionalUser(session))
    }
}

/// Resolves the session for a request and checks its role.
async fn require_session<S>(
    parts: &Parts,
    state: &S,
    role: Role,
) -> Result<Session, (StatusCode, &'static str)>
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    let auth_state = AuthState::from_ref(state);

    let session_id =
        extract_session_id(parts, &auth_state).ok_or((StatusCode::UNAUTHORIZED, "Please login first"))?;

    let session = auth_state
        .sessions
        .get_session(&session_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Session lookup failed"))?
        .ok_or((StatusCode::UNAUTHORIZED, "Session not found"))?;

    if is_session_expired(&session, Utc::now()) {
        return Err((StatusCode::UNAUTHORIZED, "Session expired"));
    }

    if session.role != role {
        return Err((StatusCode::UNAUTHORIZED, "Wrong login for this area"));
    }

    Ok(session)
}

/// Session id from a Bearer token (API clients) or the session cookie.
fn extract_session_id(parts: &Parts, auth_state: &AuthState) -> Option<SessionId> {
    if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
        if let Ok(header_value) = auth_header.to_str() {
            if let Some(token) = header_value.strip_prefix("Bearer ") {
                return Some(SessionId::new(token.to_string()));
            }
        }
    }

    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(&auth_state.config.cookie_name)
        .map(|cookie| SessionId::new(cookie.value().to_string()))
}
