//! Custom error types for the expense ledger
//!
//! Every storage operation returns an [`ExpenseResult`]; the binary's `main`
//! is the only place that turns an error into a process exit.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors (unresolvable database location)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Connection, schema, or query failures reported by SQLite
    #[error("Database error: {0}")]
    Database(String),

    /// Values the database would reject (malformed amount or date)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ExpenseError {
    /// Check if this is a database error
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_from_sqlite_error() {
        let err: ExpenseError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(err.is_database());
        assert!(!err.is_validation());
    }
}
