//! Expense model
//!
//! One ledger entry. Expenses are never edited after insertion; they are only
//! read or deleted.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};

use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Database-assigned identifier, never reused
    pub id: i64,

    /// Amount spent
    pub amount: Money,

    /// Free-text description
    pub memo: String,

    /// Calendar date the expense applies to
    pub created_on: NaiveDate,
}

impl Expense {
    /// Human-readable date, e.g. "Sun Oct 18 2026"
    pub fn display_date(&self) -> String {
        self.created_on.format("%a %b %d %Y").to_string()
    }
}

/// Sum the amounts of a result set
///
/// Fails when the sum does not fit in a [`Money`].
pub fn total(expenses: &[Expense]) -> ExpenseResult<Money> {
    expenses
        .iter()
        .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount))
        .ok_or_else(|| ExpenseError::Validation("Total of expenses is out of range".into()))
}
