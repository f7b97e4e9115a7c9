//! Schema provisioning
//!
//! The store has no separate initialization step; every operation calls
//! [`ensure_schema`] on its fresh connection before touching the table.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::ExpenseResult;

/// Name of the only table the ledger uses
pub const EXPENSES_TABLE: &str = "expenses";

/// `amount` holds integer cents. `created_on` holds ISO `YYYY-MM-DD` text so
/// ordering by the column is chronological.
const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE expenses (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    amount     INTEGER NOT NULL,
    memo       TEXT NOT NULL,
    created_on TEXT NOT NULL DEFAULT (date('now', 'localtime'))
);
"#;

/// Check whether the expenses table exists in the connected database
pub fn table_exists(conn: &Connection) -> ExpenseResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [EXPENSES_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Create the expenses table if it is absent
///
/// Returns `true` when the table was created by this call.
pub fn ensure_schema(conn: &Connection) -> ExpenseResult<bool> {
    if table_exists(conn)? {
        debug!(table = EXPENSES_TABLE, "schema present");
        return Ok(false);
    }

    conn.execute_batch(CREATE_EXPENSES_TABLE)?;
    info!(table = EXPENSES_TABLE, "created table");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'expenses'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_creates_missing_table() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn).unwrap());

        assert!(ensure_schema(&conn).unwrap());
        assert!(table_exists(&conn).unwrap());
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        assert!(ensure_schema(&conn).unwrap());
        assert!(!ensure_schema(&conn).unwrap());
        assert_eq!(table_count(&conn), 1);
    }

    #[test]
    fn test_created_on_defaults_to_today() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO expenses (amount, memo) VALUES (?1, ?2)",
            rusqlite::params![100, "Coffee"],
        )
        .unwrap();

        let created_on: String = conn
            .query_row("SELECT created_on FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(created_on.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&created_on, "%Y-%m-%d").is_ok());
    }
}
