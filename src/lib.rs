//! # commit-gate
//!
//! Checks Git commit messages against the seven rules of a great commit
//! message, including an imperative mood check for the subject line built on
//! part-of-speech tagging.
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_gate::{evaluate, LexiconTagger};
//!
//! let tagger = LexiconTagger::new();
//! let report = evaluate(&tagger, "Fix bug in parser", 50, 72).unwrap();
//! assert!(report.passed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod checker;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod git;
pub mod message;
pub mod mood;
pub mod rules;
pub mod tagging;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use crate::checker::{evaluate, Limits, RuleChecker, DEFAULT_BODY_LIMIT, DEFAULT_SUBJECT_LIMIT};
pub use crate::cli::Cli;
pub use crate::data::check::{Outcome, RuleReport, RuleResult};
pub use crate::error::{GateError, TaggerError};
pub use crate::mood::{ImperativeMoodDetector, MoodAnalysis};
pub use crate::rules::Rule;
pub use crate::tagging::{CommandTagger, LexiconTagger, PosTag, Tag, Tagger};

/// The current version of commit-gate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
