//! CLI interface for commit-gate.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub(crate) mod formatting;
pub mod help;
pub mod tags;

/// commit-gate: checks commit messages against the seven rules.
#[derive(Parser)]
#[command(name = "commit-gate")]
#[command(
    about = "Checks a commit message against the seven rules of a great Git commit message",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Checks a commit message and reports the outcome of every rule.
    Check(check::CheckCommand),
    /// Prints the part-of-speech tags the checker sees for a text.
    Tags(tags::TagsCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(),
            Commands::Tags(tags_cmd) => tags_cmd.execute(),
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
        }
    }
}
