//! Path management for the expense ledger
//!
//! Resolves where the SQLite database lives.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (`--database`, or the `EXPENSES_DB` environment
//!    variable which clap folds into the same option)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/expenses` or `~/.local/share/expenses`
//! 3. Windows: `%APPDATA%\expenses`

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// File name of the database inside the default data directory
pub const DATABASE_FILE: &str = "expenses.db";

/// Manages the paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    database: PathBuf,
}

impl LedgerPaths {
    /// Resolve the database location
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let database = match explicit {
            Some(path) => path,
            None => resolve_default_dir()?.join(DATABASE_FILE),
        };

        Ok(Self { database })
    }

    /// Create LedgerPaths pointing at a specific database file (useful for testing)
    pub fn with_database(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }

    /// Get the database file path
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Ensure the directory holding the database exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        if let Some(parent) = self.database.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        Ok(())
    }
}

/// Resolve the default data directory based on platform
#[cfg(not(windows))]
fn resolve_default_dir() -> Result<PathBuf, ExpenseError> {
    let data_base = match std::env::var("XDG_DATA_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| ExpenseError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".local").join("share")
        }
    };
    Ok(data_base.join("expenses"))
}

/// Resolve the default data directory based on platform
#[cfg(windows)]
fn resolve_default_dir() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expenses"))
}
