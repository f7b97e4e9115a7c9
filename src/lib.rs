//! Expense ledger
//!
//! A command-line expense ledger backed by SQLite. Records, lists, searches
//! and deletes expenses, and totals result sets.
//!
//! ## Modules
//!
//! - `cli`: verb routing and the clear confirmation prompt
//! - `config`: database location
//! - `display`: fixed-width rendering of result sets
//! - `error`: error types
//! - `models`: the expense and money types
//! - `storage`: connection lifecycle, schema provisioning and queries

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
