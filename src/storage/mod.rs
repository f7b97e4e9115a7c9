//! Storage layer for the expense ledger
//!
//! SQLite-backed, one connection per operation, with the schema created on
//! demand.

pub mod expenses;
pub mod schema;

pub use expenses::ExpenseStore;
pub use schema::{ensure_schema, table_exists, EXPENSES_TABLE};
