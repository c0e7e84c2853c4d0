//! `help-all`: prints the help of every command in one document.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

/// Prints help for every command.
#[derive(Parser)]
pub struct HelpCommand {}

/// Renders help text for the whole command tree.
pub struct HelpGenerator {
    app: Command,
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpGenerator {
    /// Creates a generator for the `commit-gate` command tree.
    pub fn new() -> Self {
        Self {
            app: crate::cli::Cli::command(),
        }
    }

    /// Renders the top-level help followed by every subcommand, separated by
    /// a rule of `=` characters.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(80));
        Ok(sections.join(&separator))
    }

    /// Subcommands are visited in lexicographic order so the output is stable.
    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, sections: &mut Vec<String>) {
        let mut subcommands: Vec<&Command> = cmd
            .get_subcommands()
            .filter(|sub| sub.get_name() != "help")
            .collect();
        subcommands.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for sub in subcommands {
            let path = if prefix.is_empty() {
                sub.get_name().to_string()
            } else {
                format!("{prefix} {}", sub.get_name())
            };

            sections.push(self.render_command_help(sub, &path));
            self.collect_help_recursive(sub, &path, sections);
        }
    }

    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let name = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("commit-gate {path}")
        };
        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{name} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl HelpCommand {
    /// Prints the combined help document.
    pub fn execute(self) -> Result<()> {
        println!("{}", HelpGenerator::new().generate_all_help()?);
        Ok(())
    }
}
