//! Pure functions for mapping storage errors to HTTP status codes.

use super::StorageError;

/// Maps a [`StorageError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::NotFound { .. } => 404,
        StorageError::AlreadyExists { .. } => 409,
        StorageError::ConnectionFailed(_) => 503,
        StorageError::QueryFailed(_) => 500,
        StorageError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = StorageError::NotFound {
            entity_type: "Package",
            id: "9".to_string(),
        };
        assert_eq!(storage_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = StorageError::AlreadyExists {
            entity_type: "Admin",
            id: "admin@demo.com".to_string(),
        };
        assert_eq!(storage_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = StorageError::ConnectionFailed("refused".to_string());
        assert_eq!(storage_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = StorageError::InvalidData("persons must be positive".to_string());
        assert_eq!(storage_error_to_status_code(&error), 400);
    }
}
