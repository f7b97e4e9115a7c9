//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_count, format_expense_row, format_expense_rows, format_expense_table, format_total,
};
