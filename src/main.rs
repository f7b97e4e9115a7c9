use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{route, Confirm, FixedAnswer, PromptConfirm};
use expense_ledger::config::LedgerPaths;
use expense_ledger::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Command-line expense ledger",
    long_about = "Records, lists, searches and deletes expenses stored in a SQLite \
                  database.\n\nCommands: list | add AMOUNT MEMO [DATE] | search QUERY \
                  | delete ID | clear"
)]
struct Cli {
    /// Path to the SQLite database
    #[arg(short, long, env = "EXPENSES_DB")]
    database: Option<PathBuf>,

    /// Answer the clear confirmation with yes
    #[arg(short, long)]
    yes: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Command followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::resolve(cli.database)?;
    let store = ExpenseStore::new(paths);

    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(PromptConfirm::stdio())
    };

    let mut stdout = std::io::stdout().lock();
    route(&store, cli.args.as_slice(), confirm.as_mut(), &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Log to stderr so command output on stdout stays clean
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
