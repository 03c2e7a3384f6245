//! Database backends.
//!
//! Both backends implement [`wayfare_core::storage::SqlBackend`], so the
//! store layer is written once against `?`-placeholder SQL and runs
//! unchanged on either engine.

pub mod postgres;
pub mod schema;
pub mod sqlite;

use std::sync::Arc;

use wayfare_core::storage::{Result, SqlBackend};

use crate::config::DatabaseConfig;

/// Opens the backend selected by configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn SqlBackend>> {
    let backend: Arc<dyn SqlBackend> = match config {
        DatabaseConfig::Sqlite { path } => Arc::new(sqlite::SqliteBackend::new(path).await?),
        DatabaseConfig::Postgres { url } => Arc::new(postgres::PostgresBackend::new(url).await?),
    };
    Ok(backend)
}
