//! Expense display formatting
//!
//! Pure functions from result sets to the text the CLI prints. Shared by
//! list, search and delete so every command renders rows the same way.

use crate::error::ExpenseResult;
use crate::models::expense::{total, Expense};

/// Width of the rule drawn above the total line
const SEPARATOR_WIDTH: usize = 50;

/// Format the count line for a result set
pub fn format_count(count: usize) -> String {
    match count {
        0 => "There are no expenses.".to_string(),
        1 => "There is 1 expense.".to_string(),
        n => format!("There are {} expenses.", n),
    }
}

/// Format a single expense as a fixed-width row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>3} {:>10} {:>12} {}",
        expense.id,
        expense.display_date(),
        expense.amount,
        expense.memo
    )
}

/// Format the rows of a result set, one per line, without count or total
pub fn format_expense_rows(expenses: &[Expense]) -> String {
    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }
    output
}

/// Format the separator and total block
pub fn format_total(expenses: &[Expense]) -> ExpenseResult<String> {
    Ok(format!(
        "{}\nTotal {:>30}\n",
        "-".repeat(SEPARATOR_WIDTH),
        total(expenses)?
    ))
}

/// Format a full result set: count line, rows, and a total when there is
/// more than one row
pub fn format_expense_table(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut output = format_count(expenses.len());
    output.push('\n');
    output.push_str(&format_expense_rows(expenses));

    if expenses.len() > 1 {
        output.push_str(&format_total(expenses)?);
    }

    Ok(output)
}
