//! Tags command: shows what the tagger makes of a piece of text.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::formatting::{format_tags, write_mood_analysis};
use crate::config::{ConfigOverrides, GateConfig};
use crate::data::check::OutputFormat;
use crate::mood::{ImperativeMoodDetector, MoodAnalysis};
use crate::tagging::{Tag, Tagger};

/// Tags command options - prints part-of-speech tags for a text.
#[derive(Parser)]
pub struct TagsCommand {
    /// Text to tag.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also runs the imperative mood probes, treating the text as a subject line.
    #[arg(long)]
    pub mood: bool,

    /// External part-of-speech tagger to use instead of the built-in one.
    #[arg(long, value_name = "COMMAND")]
    pub tagger_command: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Serialized form of the tags command output.
#[derive(Debug, Serialize)]
pub struct TagsOutput {
    /// Tags for the text as given.
    pub tags: Vec<Tag>,
    /// Imperative mood analysis, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodAnalysis>,
}

impl TagsCommand {
    /// Executes the tags command.
    pub fn execute(self) -> Result<()> {
        let config = GateConfig::resolve(&ConfigOverrides {
            tagger_command: self.tagger_command.clone(),
            ..ConfigOverrides::default()
        })?;
        let tagger = config.tagger()?;

        let mut stdout = StandardStream::stdout(ColorChoice::Never);
        self.run(tagger.as_ref(), &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    pub(crate) fn run(&self, tagger: &dyn Tagger, out: &mut dyn WriteColor) -> Result<()> {
        let output = TagsOutput {
            tags: tagger.tag(&self.text)?,
            mood: if self.mood {
                Some(ImperativeMoodDetector::new(tagger).analyze(&self.text)?)
            } else {
                None
            },
        };

        match self.format {
            OutputFormat::Text => {
                write!(out, "{}", format_tags(&output.tags))?;
                if let Some(analysis) = &output.mood {
                    writeln!(out)?;
                    write_mood_analysis(out, analysis)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&output)
                    .context("Failed to serialize tags as JSON")?;
                writeln!(out, "{json}")?;
            }
            OutputFormat::Yaml => {
                let yaml =
                    serde_yaml::to_string(&output).context("Failed to serialize tags as YAML")?;
                write!(out, "{yaml}")?;
            }
        }

        Ok(())
    }
}
