use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_id() {
        let error = RepositoryError::NotFound {
            entity_type: "Entry",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Entry not found: 42");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open entries.db".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open entries.db"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("unknown status 'archived'".to_string());
        assert_eq!(error.to_string(), "Invalid data: unknown status 'archived'");
    }
}
