//! Check command: evaluates one commit message against the seven rules.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::debug;

use super::formatting::{write_mood_analysis, write_preamble, write_rule_line, write_verdict};
use crate::checker::{Limits, RuleChecker};
use crate::config::{ConfigOverrides, GateConfig};
use crate::data::check::{OutputFormat, RuleReport, RuleResult};
use crate::git::GitRepository;
use crate::message::CommitMessage;
use crate::mood::ImperativeMoodDetector;
use crate::tagging::Tagger;

/// Git writes everything below this line in `commit --verbose` and drops it.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// When to color text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    fn choice(self) -> ColorChoice {
        match self {
            Self::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
            Self::Auto | Self::Never => ColorChoice::Never,
            Self::Always => ColorChoice::Always,
        }
    }
}

/// Check command options - validates a commit message against the seven rules.
#[derive(Parser)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["message", "file", "rev"])
))]
pub struct CheckCommand {
    /// The commit message to check.
    #[arg(long, short)]
    pub message: Option<String>,

    /// Reads the commit message from a file ("-" for stdin), e.g. from a
    /// commit-msg hook. Git comment lines are ignored.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Checks the message of a commit in the current repository (e.g. HEAD).
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Maximum subject line length in characters (default: 50).
    #[arg(long, value_name = "N", value_parser = parse_limit)]
    pub subject_limit: Option<usize>,

    /// Maximum length of any line in characters (default: 72).
    #[arg(long, value_name = "N", value_parser = parse_limit)]
    pub body_limit: Option<usize>,

    /// External part-of-speech tagger to use instead of the built-in one.
    #[arg(long, value_name = "COMMAND")]
    pub tagger_command: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// When to use colors in text output.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,

    /// Only prints the rule lines.
    #[arg(long)]
    pub quiet: bool,

    /// Shows how the imperative mood verdict was reached.
    #[arg(long)]
    pub verbose: bool,
}

impl CheckCommand {
    /// Executes the check command, exiting with 1 if any rule fails.
    pub fn execute(self) -> Result<()> {
        let mut stdout = StandardStream::stdout(self.color.choice());
        let report = self.run(&mut stdout)?;
        stdout.flush()?;

        let exit_code = report.exit_code();
        if exit_code != 0 {
            std::process::exit(exit_code);
        }

        Ok(())
    }

    /// Reads the message, resolves configuration and writes the results to `out`.
    pub fn run(&self, out: &mut dyn WriteColor) -> Result<RuleReport> {
        let message = self.read_message()?;
        let config = GateConfig::resolve(&self.overrides())?;
        let tagger = config.tagger()?;
        debug!("Checking commit message with the {} tagger", tagger.name());

        self.check_message(&message, config.limits, tagger.as_ref(), out)
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            subject_limit: self.subject_limit,
            body_limit: self.body_limit,
            tagger_command: self.tagger_command.clone(),
        }
    }

    fn read_message(&self) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            let content = if path.as_os_str() == "-" {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read commit message from stdin")?;
                buffer
            } else {
                fs::read_to_string(path).with_context(|| {
                    format!("Failed to read commit message file: {}", path.display())
                })?
            };
            return Ok(strip_git_comments(&content));
        }

        if let Some(rev) = &self.rev {
            let repo = GitRepository::open()
                .context("Failed to open git repository. Make sure you're in a git repository.")?;
            return repo.commit_message(rev);
        }

        bail!("No commit message given; use --message, --file or --rev")
    }

    /// Evaluates `message` and renders the report in the selected format.
    pub(crate) fn check_message(
        &self,
        message: &str,
        limits: Limits,
        tagger: &dyn Tagger,
        out: &mut dyn WriteColor,
    ) -> Result<RuleReport> {
        let parsed = CommitMessage::new(message)?;
        let text = self.format == OutputFormat::Text;

        if text && !self.quiet {
            write_preamble(out, parsed.text())?;
        }

        let checker = RuleChecker::new(tagger, limits);
        let report = checker.evaluate_with(parsed.text(), &mut |result: &RuleResult| {
            if !text {
                return;
            }
            if let Err(e) = write_rule_line(out, result) {
                debug!("Failed to write result for {}: {e}", result.rule);
            }
        })?;

        match self.format {
            OutputFormat::Text => {
                if self.verbose {
                    let analysis = ImperativeMoodDetector::new(tagger).analyze(parsed.subject())?;
                    write_mood_analysis(out, &analysis)?;
                }
                if !self.quiet {
                    write_verdict(out, &report)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report as JSON")?;
                writeln!(out, "{json}")?;
            }
            OutputFormat::Yaml => {
                let yaml =
                    serde_yaml::to_string(&report).context("Failed to serialize report as YAML")?;
                write!(out, "{yaml}")?;
            }
        }

        Ok(report)
    }
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

/// Removes the lines git would strip from an edited commit message.
fn strip_git_comments(content: &str) -> String {
    content
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
