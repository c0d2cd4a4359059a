//! Pure mapping from repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// | Variant | Status |
/// |---|---|
/// | `NotFound` | 404 |
/// | `InvalidData` | 400 |
/// | `ConnectionFailed` | 503 |
/// | `QueryFailed`, `Serialization` | 500 |
///
/// # Examples
///
/// ```
/// use dedications_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Entry",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        let not_found = RepositoryError::NotFound {
            entity_type: "Entry",
            id: "1".to_string(),
        };
        let invalid = RepositoryError::InvalidData("bad status".to_string());

        assert_eq!(repository_error_to_status_code(&not_found), 404);
        assert_eq!(repository_error_to_status_code(&invalid), 400);
    }

    #[test]
    fn test_server_errors() {
        let closed = RepositoryError::ConnectionFailed("closed".to_string());
        let query = RepositoryError::QueryFailed("disk I/O error".to_string());
        let serde = RepositoryError::Serialization("bad timestamp".to_string());

        assert_eq!(repository_error_to_status_code(&closed), 503);
        assert_eq!(repository_error_to_status_code(&query), 500);
        assert_eq!(repository_error_to_status_code(&serde), 500);
    }
}
