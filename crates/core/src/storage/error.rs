use thiserror::Error;

/// Errors that can occur during storage operations, regardless of which
/// backend produced them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = StorageError::NotFound {
            entity_type: "Package",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Package not found: 42");
    }

    #[test]
    fn test_already_exists_display() {
        let error = StorageError::AlreadyExists {
            entity_type: "User",
            id: "jane@example.com".to_string(),
        };
        assert_eq!(error.to_string(), "User already exists: jane@example.com");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = StorageError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }
}
