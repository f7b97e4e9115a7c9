//! Configuration module for the expense ledger
//!
//! The only configurable thing is where the database file lives.

pub mod paths;

pub use paths::LedgerPaths;
