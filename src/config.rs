//! Effective configuration for a check run.
//!
//! Each value is taken from the first source that provides it: command-line
//! flag, process environment, the `env` map of the settings file, then the
//! built-in default.

use anyhow::{Context, Result};

use crate::checker::{Limits, DEFAULT_BODY_LIMIT, DEFAULT_SUBJECT_LIMIT};
use crate::tagging::{CommandTagger, LexiconTagger, Tagger};
use crate::utils::Settings;

/// Environment variable holding the subject line limit.
pub const SUBJECT_LIMIT_VAR: &str = "COMMIT_GATE_SUBJECT_LIMIT";

/// Environment variable holding the line limit.
pub const BODY_LIMIT_VAR: &str = "COMMIT_GATE_BODY_LIMIT";

/// Environment variable holding an external tagger command line.
pub const TAGGER_COMMAND_VAR: &str = "COMMIT_GATE_TAGGER_COMMAND";

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Subject line limit.
    pub subject_limit: Option<usize>,
    /// Line limit.
    pub body_limit: Option<usize>,
    /// External tagger command line.
    pub tagger_command: Option<String>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Length limits.
    pub limits: Limits,
    /// External tagger command line; the built-in tagger is used when unset.
    pub tagger_command: Option<String>,
}

impl GateConfig {
    /// Resolves configuration against the environment and the settings file.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let settings = Settings::load()?;
        Self::resolve_with(overrides, |key| settings.get_env_var(key))
    }

    /// Resolves configuration using `lookup` for anything not overridden.
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let subject = match overrides.subject_limit {
            Some(limit) => limit,
            None => limit_from(&lookup, SUBJECT_LIMIT_VAR)?.unwrap_or(DEFAULT_SUBJECT_LIMIT),
        };
        let body = match overrides.body_limit {
            Some(limit) => limit,
            None => limit_from(&lookup, BODY_LIMIT_VAR)?.unwrap_or(DEFAULT_BODY_LIMIT),
        };
        let limits = Limits::new(subject, body)?;

        let tagger_command = overrides
            .tagger_command
            .clone()
            .or_else(|| lookup(TAGGER_COMMAND_VAR))
            .filter(|command| !command.trim().is_empty());

        Ok(Self {
            limits,
            tagger_command,
        })
    }

    /// Builds the tagger this configuration selects.
    pub fn tagger(&self) -> Result<Box<dyn Tagger>> {
        match &self.tagger_command {
            Some(command) => {
                let tagger = CommandTagger::new(command)
                    .with_context(|| format!("Invalid tagger command: {command:?}"))?;
                Ok(Box::new(tagger))
            }
            None => Ok(Box::new(LexiconTagger::new())),
        }
    }
}

fn limit_from(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a positive integer, got {value:?}"))
        })
        .transpose()
}
