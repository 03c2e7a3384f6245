use async_trait::async_trait;

use super::{Result, Row, SqlValue};

/// The single data-access entry point both backends implement.
///
/// Queries are written with `?` placeholders and an ordered parameter list;
/// each backend is responsible for adapting the placeholder syntax, choosing
/// a commit/rollback strategy, and mapping engine errors into
/// [`StorageError`](super::StorageError).
#[async_trait]
pub trait SqlBackend: Send + Sync {
    /// Runs a statement without retrieving rows. Returns rows affected.
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<u64>;

    /// Runs an INSERT and returns the auto-increment id of the new row.
    ///
    /// SQLite reads `last_insert_rowid()`; Postgres appends `RETURNING id`.
    async fn insert(&self, sql: &str, params: Vec<SqlValue>) -> Result<i64>;

    /// Retrieves at most one row.
    async fn fetch_optional(&self, sql: &str, params: Vec<SqlValue>) -> Result<Option<Row>>;

    /// Retrieves all matching rows.
    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>>;

    /// Runs a multi-statement script. Used for schema initialization only;
    /// takes no parameters.
    async fn execute_batch(&self, sql: &str) -> Result<()>;

    /// Name of the backend, for startup logging.
    fn name(&self) -> &'static str;
}
