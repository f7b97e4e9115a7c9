//! Confirmation prompts for destructive commands
//!
//! The router asks a [`Confirm`] implementation before clearing the ledger.
//! The interactive implementation blocks on a line of input; `--yes` and the
//! tests swap in a fixed answer.

use std::io::{self, BufRead, Write};

use crate::error::ExpenseResult;

/// Asks the user a yes/no question
pub trait Confirm {
    /// Show `prompt` and report whether the answer was affirmative
    fn confirm(&mut self, prompt: &str) -> ExpenseResult<bool>;
}

/// Prompts on a writer and reads the answer from a reader
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    /// Create a prompt over arbitrary streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> ExpenseResult<bool> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // Input closed before an answer arrived
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}

/// Answers every prompt the same way without reading input
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> ExpenseResult<bool> {
        Ok(self.0)
    }
}

/// Only an exact `y` counts; the line terminator is ignored
fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']) == "y"
}
