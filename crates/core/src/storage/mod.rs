mod error;
mod http_mapping;
mod sql;
mod traits;
mod value;

pub use error::{Result, StorageError};
pub use http_mapping::storage_error_to_status_code;
pub use sql::{rewrite_placeholders, with_returning_id};
pub use traits::SqlBackend;
pub use value::{Row, SqlValue};
