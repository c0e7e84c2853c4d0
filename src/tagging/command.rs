//! Tagger backed by an external program.
//!
//! The program receives the text to tag on stdin and must print one
//! `token<TAB>label` pair per line on stdout, in token order. Blank lines are
//! ignored. Anything else written to stdout is treated as malformed output.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::{PosTag, Tag, Tagger};
use crate::error::TaggerError;

/// Runs an external tagging program for every call.
#[derive(Debug, Clone)]
pub struct CommandTagger {
    program: String,
    args: Vec<String>,
    display: String,
}

impl CommandTagger {
    /// Creates a tagger from a command line such as `"python3 tag.py --model en"`.
    ///
    /// The command line is split on whitespace; no shell is involved.
    pub fn new(command_line: &str) -> Result<Self, TaggerError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| TaggerError::Unavailable("Tagger command is empty".to_string()))?;

        Ok(Self {
            program,
            args: parts.collect(),
            display: command_line.trim().to_string(),
        })
    }

    /// Returns the program that will be executed.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Tagger for CommandTagger {
    fn name(&self) -> &str {
        &self.display
    }

    fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError> {
        debug!("Running tagger command {:?} on {text:?}", self.display);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TaggerError::Unavailable(format!("failed to run {}: {e}", self.display)))?;

        // A program that exits without reading its input closes the pipe early;
        // its exit status decides the outcome.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(TaggerError::Unavailable(format!(
                        "failed to write to {}: {e}",
                        self.display
                    )));
                }
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(|e| {
            TaggerError::Unavailable(format!("failed to read from {}: {e}", self.display))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "Tagger command {:?} exited with {}: {}",
                self.display,
                output.status,
                stderr.trim()
            );
            return Err(TaggerError::Unavailable(format!(
                "{} exited with {}",
                self.display, output.status
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| TaggerError::Malformed("tagger output is not valid UTF-8".to_string()))?;

        parse_tagger_output(&stdout)
    }
}

/// Parses `token<TAB>label` lines into tags.
pub(crate) fn parse_tagger_output(output: &str) -> Result<Vec<Tag>, TaggerError> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (token, label) = line
                .split_once('\t')
                .ok_or_else(|| TaggerError::Malformed(format!("missing tab in line {line:?}")))?;
            let (token, label) = (token.trim(), label.trim());
            if token.is_empty() || label.is_empty() {
                return Err(TaggerError::Malformed(format!(
                    "empty token or label in line {line:?}"
                )));
            }
            Ok(Tag::new(token, PosTag::parse(label)))
        })
        .collect()
}
