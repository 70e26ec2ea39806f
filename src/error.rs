//! Error types for plank.

use thiserror::Error;

/// Common error type for plank.
#[derive(Error, Debug)]
pub enum PlankError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from the database
    /// backend. Errors from sqlx are converted through [`PlankError::from_sqlx`]
    /// so that unique-constraint violations surface as [`PlankError::Conflict`].
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness conflict (duplicate board name, duplicate post title).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PlankError {
    /// Convert an sqlx error, classifying unique-constraint violations.
    ///
    /// The UNIQUE indexes on `boards.name` and `(posts.board_id, posts.title)`
    /// are the authoritative backstop against duplicate rows slipping past the
    /// read-then-write pre-checks; a violation reported by the store becomes a
    /// `Conflict` with the given message.
    pub fn from_sqlx(e: sqlx::Error, conflict_message: &str) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return PlankError::Conflict(conflict_message.to_string());
            }
        }
        PlankError::Database(e.to_string())
    }
}

impl From<sqlx::Error> for PlankError {
    fn from(e: sqlx::Error) -> Self {
        PlankError::Database(e.to_string())
    }
}

/// Result type alias for plank operations.
pub type Result<T> = std::result::Result<T, PlankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = PlankError::Auth("invalid password".to_string());
        assert_eq!(err.to_string(), "authentication error: invalid password");
    }

    #[test]
    fn test_permission_error_display() {
        let err = PlankError::Permission("not the creator of this board".to_string());
        assert_eq!(
            err.to_string(),
            "permission denied: not the creator of this board"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = PlankError::NotFound("board".to_string());
        assert_eq!(err.to_string(), "board not found");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = PlankError::Conflict("board name already taken".to_string());
        assert_eq!(err.to_string(), "conflict: board name already taken");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlankError = io_err.into();
        assert!(matches!(err, PlankError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: PlankError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PlankError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(PlankError::Auth("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
