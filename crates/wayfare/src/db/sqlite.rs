//! SQLite backend.
//!
//! Runs the unified execution contract over an embedded SQLite database via
//! `tokio_rusqlite`. Queries use `?` placeholders natively, so no rewriting
//! happens here; statements run in autocommit, letting the engine roll back
//! an individual failed statement on its own.

use async_trait::async_trait;
use rusqlite::types::{Value, ValueRef};
use tokio_rusqlite::Connection;

use wayfare_core::storage::{Result, Row, SqlBackend, SqlValue, StorageError};

use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based backend over a single async connection.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Opens (creating if needed) a file-based database and runs the schema
    /// script.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database. Used by tests; data is lost when the
    /// connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init(&conn).await?;

        Ok(Self { conn })
    }

    async fn init(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.pragma_update(None, "foreign_keys", true)
                .map_err(wrap_err)?;
            conn.execute_batch(&schema::create_tables(schema::SQLITE_AUTO_ID))
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl SqlBackend for SqliteBackend {
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<u64> {
        let sql = sql.to_string();
        let params = to_sqlite_params(params);

        self.conn
            .call(move |conn| {
                let affected = conn
                    .execute(&sql, rusqlite::params_from_iter(params))
                    .map_err(wrap_err)?;
                Ok(affected as u64)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn insert(&self, sql: &str, params: Vec<SqlValue>) -> Result<i64> {
        let sql = sql.to_string();
        let params = to_sqlite_params(params);

        self.conn
            .call(move |conn| {
                conn.execute(&sql, rusqlite::params_from_iter(params))
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn fetch_optional(&self, sql: &str, params: Vec<SqlValue>) -> Result<Option<Row>> {
        let mut rows = self.query_rows(sql, params).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>> {
        self.query_rows(sql, params).await
    }

    async fn execute_batch(&self, sql: &str) -> Result<()> {
        let sql = sql.to_string();

        self.conn
            .call(move |conn| {
                conn.execute_batch(&sql).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

impl SqliteBackend {
    async fn query_rows(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>> {
        let sql = sql.to_string();
        let params = to_sqlite_params(params);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let names: Vec<String> =
                    stmt.column_names().iter().map(|s| s.to_string()).collect();

                let mut rows = stmt
                    .query(rusqlite::params_from_iter(params))
                    .map_err(wrap_err)?;

                let mut out = Vec::new();
                while let Some(row) = rows.next().map_err(wrap_err)? {
                    let mut cells = Vec::with_capacity(names.len());
                    for (i, name) in names.iter().enumerate() {
                        let value = row.get_ref(i).map_err(wrap_err)?;
                        cells.push((name.clone(), from_sqlite_ref(i, value).map_err(wrap_err)?));
                    }
                    out.push(Row::new(cells));
                }
                Ok(out)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

fn to_sqlite_params(params: Vec<SqlValue>) -> Vec<Value> {
    params
        .into_iter()
        .map(|p| match p {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(v) => Value::Integer(v),
            SqlValue::Real(v) => Value::Real(v),
            SqlValue::Text(v) => Value::Text(v),
        })
        .collect()
}

fn from_sqlite_ref(index: usize, value: ValueRef<'_>) -> rusqlite::Result<SqlValue> {
    match value {
        ValueRef::Null => Ok(SqlValue::Null),
        ValueRef::Integer(v) => Ok(SqlValue::Integer(v)),
        ValueRef::Real(v) => Ok(SqlValue::Real(v)),
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec())
            .map(SqlValue::Text)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    index,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            }),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            index,
            "blob columns are not part of the schema".to_string(),
            rusqlite::types::Type::Blob,
        )),
    }
}

/// Maps a tokio_rusqlite error to a StorageError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` →
///   `StorageError::AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `StorageError::InvalidData`
/// - Cannot-open and closed-connection errors →
///   `StorageError::ConnectionFailed`
/// - All other errors → `StorageError::QueryFailed`
///
/// The offending row key is not recoverable from the engine error; callers
/// that know it rewrite the `AlreadyExists` id at the call site.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> StorageError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::Close(_) => {
            StorageError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => StorageError::QueryFailed(err.to_string()),
    }
}

fn map_rusqlite_error(err: &rusqlite::Error) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            StorageError::AlreadyExists {
                entity_type: "record",
                id: "unknown".to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StorageError::InvalidData("Foreign key constraint violation".to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StorageError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => StorageError::NotFound {
            entity_type: "record",
            id: "unknown".to_string(),
        },

        _ => StorageError::QueryFailed(err.to_string()),
    }
}
