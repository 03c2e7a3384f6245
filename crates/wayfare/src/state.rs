//! Shared application state.

use wayfare_auth::AuthState;

use crate::store::Store;

/// Cloned into every handler; holds the store and the auth state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(store: Store, auth: AuthState) -> Self {
        Self { store, auth }
    }
}

/// Lets the auth extractors pull their state out of ours.
impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use wayfare_auth::{hash_password, AuthConfig, SessionStore};

    use crate::db::sqlite::SqliteBackend;
    use crate::store::SeedAdmin;

    use super::*;

    /// In-memory state seeded like a fresh deployment: the default admin
    /// (admin@demo.com / admin123) and the two demo packages.
    pub async fn seeded_state() -> AppState {
        let backend = SqliteBackend::new_in_memory()
            .await
            .expect("in-memory sqlite");
        let store = Store::new(Arc::new(backend));
        store
            .seed(SeedAdmin {
                email: "admin@demo.com".to_string(),
                password_hash: hash_password("admin123").expect("hash"),
            })
            .await
            .expect("seed");

        let auth = AuthState::new(Arc::new(SessionStore::new()), AuthConfig::default());

        AppState::new(store, auth)
    }
}
