//! The store layer.
//!
//! Entity queries are written once with `?` placeholders against the
//! [`SqlBackend`] trait, so they run unchanged on SQLite and Postgres.
//! Timestamps are written by the host as RFC 3339 strings and travel dates
//! as `YYYY-MM-DD`, which both engines compare lexically.

mod accounts;
mod activity;
mod bookings;
pub mod conversions;
mod feedback;
mod packages;
mod seed;

use std::sync::Arc;

use chrono::Utc;

use wayfare_core::storage::SqlBackend;

pub use seed::SeedAdmin;

/// Query access to the selected backend, shared across handlers.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn SqlBackend>,
}

impl Store {
    pub fn new(backend: Arc<dyn SqlBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub(crate) fn backend(&self) -> &dyn SqlBackend {
        self.backend.as_ref()
    }

    /// Current instant as the stored RFC 3339 TEXT representation.
    pub(crate) fn now_string() -> String {
        Utc::now().to_rfc3339()
    }

    /// Today's date as `YYYY-MM-DD`, for lexical travel-date comparisons.
    pub(crate) fn today_string() -> String {
        Utc::now().date_naive().to_string()
    }
}
