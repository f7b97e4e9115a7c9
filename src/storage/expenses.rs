//! Expense store
//!
//! Every public operation opens its own connection, ensures the schema,
//! runs its statements and drops the connection when it returns, whether it
//! returns `Ok` or `Err`.

use chrono::{Local, NaiveDate};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::ExpenseResult;
use crate::models::{Expense, Money};

use super::schema::ensure_schema;

const SELECT_COLUMNS: &str = "SELECT id, amount, memo, created_on FROM expenses";

/// SQL function lowercasing its argument with Unicode rules. SQLite's own
/// `lower()` and `LIKE` only fold ASCII letters.
const FOLD_CASE: &str = "fold_case";

/// Data access for the expenses table
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    paths: LedgerPaths,
}

impl ExpenseStore {
    /// Create a store for the database at the given location
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Open a connection with the schema guaranteed to exist
    ///
    /// The connection closes when the returned value is dropped.
    pub fn connect(&self) -> ExpenseResult<Connection> {
        self.paths.ensure_directories()?;

        let database = self.paths.database();
        debug!(path = %database.display(), "opening database");
        let conn = Connection::open(database)?;
        register_functions(&conn)?;
        ensure_schema(&conn)?;
        Ok(conn)
    }

    /// All expenses ordered by date, oldest first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY created_on ASC, id ASC"))?;
        let expenses = stmt
            .query_map([], map_expense)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Record a new expense
    ///
    /// `created_on` falls back to today's local date.
    pub fn add(
        &self,
        amount: Money,
        memo: &str,
        date: Option<NaiveDate>,
    ) -> ExpenseResult<Expense> {
        let created_on = date.unwrap_or_else(|| Local::now().date_naive());

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO expenses (amount, memo, created_on) VALUES (?1, ?2, ?3)",
            params![amount.cents(), memo, created_on],
        )?;
        let id = conn.last_insert_rowid();

        info!(id, amount = %amount, %created_on, "added expense");
        Ok(Expense {
            id,
            amount,
            memo: memo.to_string(),
            created_on,
        })
    }

    /// Expenses whose memo contains `term`, ignoring case
    pub fn search(&self, term: &str) -> ExpenseResult<Vec<Expense>> {
        let pattern = format!("%{}%", term.to_lowercase());

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE {FOLD_CASE}(memo) LIKE ?1"))?;
        let expenses = stmt
            .query_map(params![pattern], map_expense)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(term, count = expenses.len(), "searched expenses");
        Ok(expenses)
    }

    /// Look up a single expense
    pub fn find(&self, id: i64) -> ExpenseResult<Option<Expense>> {
        let conn = self.connect()?;
        find_on(&conn, id)
    }

    /// Delete one expense, returning the removed row if it existed
    pub fn delete_by_id(&self, id: i64) -> ExpenseResult<Option<Expense>> {
        let conn = self.connect()?;

        let Some(expense) = find_on(&conn, id)? else {
            debug!(id, "no expense to delete");
            return Ok(None);
        };

        conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        info!(id, "deleted expense");
        Ok(Some(expense))
    }

    /// Delete every expense, returning how many rows were removed
    pub fn delete_all(&self) -> ExpenseResult<usize> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM expenses", [])?;

        info!(removed, "deleted all expenses");
        Ok(removed)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT count(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn register_functions(conn: &Connection) -> ExpenseResult<()> {
    conn.create_scalar_function(
        FOLD_CASE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
    )?;
    Ok(())
}

fn find_on(conn: &Connection, id: i64) -> ExpenseResult<Option<Expense>> {
    let expense = conn
        .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], map_expense)
        .optional()?;
    Ok(expense)
}

fn map_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: Money::from_cents(row.get(1)?),
        memo: row.get(2)?,
        created_on: row.get(3)?,
    })
}
