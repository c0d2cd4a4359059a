//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `dedications_core::storage`.

use dedications_core::storage::RepositoryError;

const ENTITY: &str = "Entry";

/// Maps a rusqlite error to a RepositoryError.
///
/// - `QueryReturnedNoRows` → `NotFound` carrying `id`
/// - `SQLITE_CONSTRAINT_CHECK` / `SQLITE_CONSTRAINT_NOTNULL` → `InvalidData`
/// - `CannotOpen` → `ConnectionFailed`
/// - row conversion failures → `Serialization`
/// - everything else → `QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type: ENTITY,
            id: id.to_string(),
        },

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_CHECK
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL =>
        {
            RepositoryError::InvalidData(format!("Constraint violation for {ENTITY}: {err}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// Use when no single entry ID is involved (listing, schema setup).
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, "unknown")
}

/// Maps a tokio_rusqlite error for an operation on a known entry ID.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    id: impl Into<String>,
) -> RepositoryError {
    let id: String = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, &id),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn sqlite_failure(code: rusqlite::ErrorCode, extended_code: i32) -> tokio_rusqlite::Error {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
            ffi::Error {
                code,
                extended_code,
            },
            None,
        ))
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        match map_tokio_rusqlite_error_with_id(err, "17") {
            RepositoryError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Entry");
                assert_eq!(id, "17");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_check_constraint_maps_to_invalid_data() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_CHECK,
        );

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            RepositoryError::InvalidData(_)
        ));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        assert!(matches!(
            map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("disk full")));

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            RepositoryError::QueryFailed(_)
        ));
    }
}
