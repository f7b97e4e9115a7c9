//! Command routing
//!
//! Turns the raw tokens after the program's options into one ledger
//! operation. Missing arguments and unknown verbs are answered with usage or
//! help text and never touch storage.

use std::io::Write;

use chrono::NaiveDate;
use tracing::debug;

use crate::display::{format_expense_row, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::storage::ExpenseStore;

use super::confirm::Confirm;

/// Help text listing every command
pub const HELP_TEXT: &str = "\
An expense recording system

Commands:

add AMOUNT MEMO [DATE] - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field
";

/// Question asked before `clear`
pub const CLEAR_PROMPT: &str = "This will remove all expenses. Are you sure? (y/n)";

/// Accepted format for the optional `add` date
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A routed command with its positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add {
        amount: String,
        memo: String,
        date: Option<String>,
    },
    Search {
        term: String,
    },
    Delete {
        id: String,
    },
    Clear,
    Help,
}

/// A verb given without the arguments it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    MissingAmountOrMemo,
    MissingSearchTerm,
    MissingId,
}

impl UsageError {
    /// The message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAmountOrMemo => "You must provide an amount and memo.",
            Self::MissingSearchTerm => "You must provide a search term.",
            Self::MissingId => "You must provide an expense id.",
        }
    }
}

impl Command {
    /// Parse the verb and its positional arguments
    ///
    /// An absent or unrecognized verb yields [`Command::Help`].
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, UsageError> {
        let mut tokens = tokens.iter().map(|t| t.as_ref().to_string());

        let command = match tokens.next().as_deref() {
            Some("list") => Self::List,
            Some("add") => match (tokens.next(), tokens.next()) {
                (Some(amount), Some(memo)) => Self::Add {
                    amount,
                    memo,
                    date: tokens.next(),
                },
                _ => return Err(UsageError::MissingAmountOrMemo),
            },
            Some("search") => Self::Search {
                term: tokens.next().ok_or(UsageError::MissingSearchTerm)?,
            },
            Some("delete") => Self::Delete {
                id: tokens.next().ok_or(UsageError::MissingId)?,
            },
            Some("clear") => Self::Clear,
            _ => Self::Help,
        };

        Ok(command)
    }
}

/// Parse `tokens` and run the resulting command
pub fn route<S, C, W>(
    store: &ExpenseStore,
    tokens: &[S],
    confirm: &mut C,
    out: &mut W,
) -> ExpenseResult<()>
where
    S: AsRef<str>,
    C: Confirm + ?Sized,
    W: Write,
{
    match Command::parse(tokens) {
        Ok(command) => handle_command(store, command, confirm, out),
        Err(usage) => {
            debug!(?usage, "incomplete command");
            writeln!(out, "{}", usage.message())?;
            Ok(())
        }
    }
}

/// Run one command against the store
pub fn handle_command<C, W>(
    store: &ExpenseStore,
    command: Command,
    confirm: &mut C,
    out: &mut W,
) -> ExpenseResult<()>
where
    C: Confirm + ?Sized,
    W: Write,
{
    debug!(?command, "dispatching");

    match command {
        Command::List => {
            let expenses = store.list()?;
            write!(out, "{}", format_expense_table(&expenses)?)?;
        }

        Command::Add { amount, memo, date } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;
            let date = date.as_deref().map(parse_date).transpose()?;
            store.add(amount, &memo, date)?;
        }

        Command::Search { term } => {
            let expenses = store.search(&term)?;
            write!(out, "{}", format_expense_table(&expenses)?)?;
        }

        Command::Delete { id } => {
            // An id that is not a number cannot match a row
            let deleted = match id.trim().parse::<i64>() {
                Ok(numeric) => store.delete_by_id(numeric)?,
                Err(_) => None,
            };

            match deleted {
                Some(expense) => {
                    writeln!(out, "The following expense has been deleted:")?;
                    writeln!(out, "{}", format_expense_row(&expense))?;
                }
                None => writeln!(out, "There is no expense with the id '{}'.", id)?,
            }
        }

        Command::Clear => {
            if confirm.confirm(CLEAR_PROMPT)? {
                store.delete_all()?;
                writeln!(out, "All expenses have been deleted.")?;
            }
        }

        Command::Help => write!(out, "{}", HELP_TEXT)?,
    }

    Ok(())
}

fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| ExpenseError::Validation(format!("Invalid date '{}': {}", s, e)))
}
