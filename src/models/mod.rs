//! Core data models for the expense ledger

pub mod expense;
pub mod money;

pub use expense::Expense;
pub use money::{Money, MoneyParseError};
