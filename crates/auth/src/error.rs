use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Auth errors for the wayfare_auth crate.
///
/// Wraps the core `AuthError` and adds the password-hashing variants that
/// cannot live in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module.
    #[error(transparent)]
    Core(#[from] wayfare_core::auth::AuthError),

    /// Password hashing or PHC-string parsing failed.
    #[error("password hashing error: {0}")]
    Hash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use wayfare_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(CoreError::SessionNotFound | CoreError::SessionExpired) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AuthError::Core(CoreError::Storage(_)) | AuthError::Hash(_) => {
                tracing::error!(error = %self, "auth failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "authentication failed".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
