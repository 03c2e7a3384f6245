//! Backend-neutral parameter and row values.
//!
//! The two engines disagree on cursor and row types (rusqlite's `ValueRef`
//! rows vs sqlx's typed columns). Both backends translate into this small
//! dynamic model so the store layer can be written once.

use serde::Serialize;

use super::{Result, StorageError};

/// A single SQL parameter or result cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

/// One result row, addressable by column name.
///
/// Column lookup is linear; rows here are a handful of columns wide.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn new(cells: Vec<(String, SqlValue)>) -> Self {
        Self { cells }
    }

    fn find(&self, column: &str) -> Result<&SqlValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| StorageError::InvalidData(format!("missing column: {column}")))
    }

    pub fn get_i64(&self, column: &str) -> Result<i64> {
        match self.find(column)? {
            SqlValue::Integer(v) => Ok(*v),
            other => Err(type_mismatch(column, "integer", other)),
        }
    }

    /// Reads a REAL column, accepting integers for engines that return
    /// `SUM`/literal results without a fractional part.
    pub fn get_f64(&self, column: &str) -> Result<f64> {
        match self.find(column)? {
            SqlValue::Real(v) => Ok(*v),
            SqlValue::Integer(v) => Ok(*v as f64),
            other => Err(type_mismatch(column, "real", other)),
        }
    }

    pub fn get_text(&self, column: &str) -> Result<String> {
        match self.find(column)? {
            SqlValue::Text(v) => Ok(v.clone()),
            other => Err(type_mismatch(column, "text", other)),
        }
    }

    pub fn get_opt_text(&self, column: &str) -> Result<Option<String>> {
        match self.find(column)? {
            SqlValue::Text(v) => Ok(Some(v.clone())),
            SqlValue::Null => Ok(None),
            other => Err(type_mismatch(column, "text", other)),
        }
    }

    pub fn get_opt_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.find(column)? {
            SqlValue::Integer(v) => Ok(Some(*v)),
            SqlValue::Null => Ok(None),
            other => Err(type_mismatch(column, "integer", other)),
        }
    }
}

fn type_mismatch(column: &str, expected: &str, got: &SqlValue) -> StorageError {
    StorageError::InvalidData(format!(
        "column {column}: expected {expected}, got {got:?}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(vec![
            ("id".to_string(), SqlValue::Integer(3)),
            ("title".to_string(), SqlValue::Text("Beach Escape".into())),
            ("price".to_string(), SqlValue::Real(12999.0)),
            ("description".to_string(), SqlValue::Null),
        ])
    }

    #[test]
    fn typed_getters_read_matching_cells() {
        let row = sample_row();
        assert_eq!(row.get_i64("id").unwrap(), 3);
        assert_eq!(row.get_text("title").unwrap(), "Beach Escape");
        assert_eq!(row.get_f64("price").unwrap(), 12999.0);
        assert_eq!(row.get_opt_text("description").unwrap(), None);
    }

    #[test]
    fn get_f64_coerces_integers() {
        let row = Row::new(vec![("c".to_string(), SqlValue::Integer(5))]);
        assert_eq!(row.get_f64("c").unwrap(), 5.0);
    }

    #[test]
    fn missing_column_is_invalid_data() {
        let row = sample_row();
        assert!(matches!(
            row.get_i64("nope"),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn type_mismatch_is_invalid_data() {
        let row = sample_row();
        assert!(matches!(
            row.get_i64("title"),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn option_converts_into_null() {
        assert_eq!(SqlValue::from(None::<String>), SqlValue::Null);
        assert_eq!(
            SqlValue::from(Some("x".to_string())),
            SqlValue::Text("x".into())
        );
    }
}
