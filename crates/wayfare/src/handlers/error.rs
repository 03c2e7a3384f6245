use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use wayfare_core::storage::{storage_error_to_status_code, StorageError};

use crate::models::MessageResponse;

/// Errors a handler can produce before touching storage.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
}

pub struct AppError(pub anyhow::Error);

/// 400 for a rejected request payload.
pub fn bad_request(message: impl Into<String>) -> AppError {
    AppError(RequestError::Validation(message.into()).into())
}

/// 401 for a failed login or password check.
pub fn unauthorized(message: impl Into<String>) -> AppError {
    AppError(RequestError::Unauthorized(message.into()).into())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(storage_error) = self.0.downcast_ref::<StorageError>() {
            let code = storage_error_to_status_code(storage_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            match request_error {
                RequestError::Validation(_) => StatusCode::BAD_REQUEST,
                RequestError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            }
        } else {
            tracing::error!(error = %self.0, "unhandled error in handler");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, Json(MessageResponse::new(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
