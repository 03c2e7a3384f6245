use thiserror::Error;

/// Auth errors shared between the core functions and the session store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("session not found")]
    SessionNotFound,
    #[error("session expired")]
    SessionExpired,
    #[error("storage error: {0}")]
    Storage(String),
}
