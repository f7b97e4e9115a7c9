//! CLI command handlers
//!
//! This module bridges the raw command-line tokens with the storage layer.

pub mod confirm;
pub mod router;

pub use confirm::{Confirm, FixedAnswer, PromptConfirm};
pub use router::{handle_command, route, Command, UsageError, CLEAR_PROMPT, HELP_TEXT};
