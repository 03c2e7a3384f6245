//! Session and password authentication for wayfare.
//!
//! This crate provides:
//! - Argon2 password hashing and verification
//! - An in-memory session store keyed by random session ids
//! - Axum extractors for the user portal and the admin surface

mod config;
mod error;
mod extractors;
mod password;
mod sessions;
mod state;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{CurrentAdmin, CurrentUser, OptionalUser};
pub use password::{hash_password, verify_password};
pub use sessions::SessionStore;
pub use state::AuthState;
