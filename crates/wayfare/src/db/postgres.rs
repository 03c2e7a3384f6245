//! PostgreSQL backend.
//!
//! Runs the unified execution contract against a networked PostgreSQL server
//! via sqlx. Incoming queries use the `?` placeholder convention, so every
//! call first rewrites them to `$1..$n`. Each parameterized call runs in its own
//! transaction: commit on success, rollback (by dropping the transaction) on
//! error, with the error logged before it propagates.

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPool, PgPoolOptions, PgRow},
    Column, Row as _, TypeInfo,
};

use wayfare_core::storage::{
    rewrite_placeholders, with_returning_id, Result, Row, SqlBackend, SqlValue, StorageError,
};

use super::schema;

/// PostgreSQL-based backend over a connection pool.
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    /// Connects to the server and runs the schema script.
    pub async fn new(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let backend = Self { pool };
        backend
            .execute_batch(&schema::create_tables(schema::POSTGRES_AUTO_ID))
            .await?;

        Ok(backend)
    }
}

#[async_trait]
impl SqlBackend for PostgresBackend {
    async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<u64> {
        let sql = rewrite_placeholders(sql);
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = bind_params(sqlx::query(&sql), params)
            .execute(&mut *tx)
            .await
            .map_err(log_and_map)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn insert(&self, sql: &str, params: Vec<SqlValue>) -> Result<i64> {
        let sql = with_returning_id(&rewrite_placeholders(sql));
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row = bind_params(sqlx::query(&sql), params)
            .fetch_one(&mut *tx)
            .await
            .map_err(log_and_map)?;
        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(id)
    }

    async fn fetch_optional(&self, sql: &str, params: Vec<SqlValue>) -> Result<Option<Row>> {
        let sql = rewrite_placeholders(sql);
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row = bind_params(sqlx::query(&sql), params)
            .fetch_optional(&mut *tx)
            .await
            .map_err(log_and_map)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        row.as_ref().map(from_pg_row).transpose()
    }

    async fn fetch_all(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Row>> {
        let sql = rewrite_placeholders(sql);
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let rows = bind_params(sqlx::query(&sql), params)
            .fetch_all(&mut *tx)
            .await
            .map_err(log_and_map)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        rows.iter().map(from_pg_row).collect()
    }

    async fn execute_batch(&self, sql: &str) -> Result<()> {
        // DDL statements autocommit; running the script straight on the
        // pool also keeps the raw-sql executor out of the trait lifetime.
        sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map_err(log_and_map)?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

type PgQuery<'q> =
    sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

fn bind_params(mut query: PgQuery<'_>, params: Vec<SqlValue>) -> PgQuery<'_> {
    for param in params {
        query = match param {
            // Nullable columns in the schema are all TEXT, so a text-typed
            // null satisfies the parameter's inferred type.
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Real(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
        };
    }
    query
}

fn from_pg_row(row: &PgRow) -> Result<Row> {
    let mut cells = Vec::with_capacity(row.columns().len());

    for (i, column) in row.columns().iter().enumerate() {
        let value = match column.type_info().name() {
            "INT8" => row
                .try_get::<Option<i64>, _>(i)
                .map(|v| v.map(SqlValue::Integer)),
            "INT4" => row
                .try_get::<Option<i32>, _>(i)
                .map(|v| v.map(|n| SqlValue::Integer(n as i64))),
            "INT2" => row
                .try_get::<Option<i16>, _>(i)
                .map(|v| v.map(|n| SqlValue::Integer(n as i64))),
            "FLOAT8" => row
                .try_get::<Option<f64>, _>(i)
                .map(|v| v.map(SqlValue::Real)),
            "FLOAT4" => row
                .try_get::<Option<f32>, _>(i)
                .map(|v| v.map(|n| SqlValue::Real(n as f64))),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
                .try_get::<Option<String>, _>(i)
                .map(|v| v.map(SqlValue::Text)),
            other => {
                return Err(StorageError::InvalidData(format!(
                    "column {}: unsupported type {other}",
                    column.name()
                )))
            }
        };

        let value = value.map_err(map_sqlx_error)?.unwrap_or(SqlValue::Null);
        cells.push((column.name().to_string(), value));
    }

    Ok(Row::new(cells))
}

fn log_and_map(err: sqlx::Error) -> StorageError {
    tracing::error!(error = %err, "postgres statement failed, rolling back");
    map_sqlx_error(err)
}

/// Maps a sqlx error to a StorageError.
///
/// # Error Mapping
///
/// - SQLSTATE 23505 (unique_violation) → `StorageError::AlreadyExists`
/// - SQLSTATE 23503 (foreign_key_violation) → `StorageError::InvalidData`
/// - I/O, TLS, and pool errors → `StorageError::ConnectionFailed`
/// - `RowNotFound` → `StorageError::NotFound`
/// - All other errors → `StorageError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => StorageError::AlreadyExists {
                entity_type: "record",
                id: "unknown".to_string(),
            },
            Some("23503") => {
                StorageError::InvalidData("Foreign key constraint violation".to_string())
            }
            _ => StorageError::QueryFailed(db_err.to_string()),
        },
        sqlx::Error::RowNotFound => StorageError::NotFound {
            entity_type: "record",
            id: "unknown".to_string(),
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StorageError::ConnectionFailed(err.to_string()),
        _ => StorageError::QueryFailed(err.to_string()),
    }
}
