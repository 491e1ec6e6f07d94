//! Translation of `sqlx` errors into repository errors.

use crate::domain::repositories::{RepositoryError, UniqueColumn};

/// Maps a `sqlx` error onto the repository error taxonomy.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error()
        && db_err.is_unique_violation()
    {
        return RepositoryError::UniqueViolation(unique_column(
            db_err.constraint(),
            db_err.message(),
        ));
    }

    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => RepositoryError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => RepositoryError::InvalidData(message),
        _ => RepositoryError::Query(message),
    }
}

/// Identifies the column behind a unique violation.
///
/// Prefers the constraint name when the backend reports one; SQLite only
/// names the column in the message (`UNIQUE constraint failed: url_mappings.short_code`).
fn unique_column(constraint: Option<&str>, message: &str) -> UniqueColumn {
    let source = constraint.unwrap_or(message);

    if source.contains("short_code") {
        UniqueColumn::ShortCode
    } else if source.contains("original_url") {
        UniqueColumn::OriginalUrl
    } else {
        UniqueColumn::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_column_from_sqlite_message() {
        assert_eq!(
            unique_column(None, "UNIQUE constraint failed: url_mappings.short_code"),
            UniqueColumn::ShortCode
        );
        assert_eq!(
            unique_column(None, "UNIQUE constraint failed: url_mappings.original_url"),
            UniqueColumn::OriginalUrl
        );
    }

    #[test]
    fn test_unique_column_prefers_constraint_name() {
        assert_eq!(
            unique_column(Some("url_mappings_short_code_key"), "duplicate key"),
            UniqueColumn::ShortCode
        );
    }

    #[test]
    fn test_unique_column_unknown() {
        assert_eq!(
            unique_column(None, "UNIQUE constraint failed"),
            UniqueColumn::Unknown
        );
    }

    #[test]
    fn test_pool_timeout_maps_to_timeout() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::Timeout(_)
        ));
    }

    #[test]
    fn test_row_not_found_maps_to_invalid_data() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::InvalidData(_)
        ));
    }
}
