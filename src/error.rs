//! Error types for commit message evaluation.

use thiserror::Error;

/// Errors that stop an evaluation before a verdict can be reached.
///
/// A rule that fails is not an error; it is reported as
/// [`Outcome::Failed`](crate::data::check::Outcome::Failed).
#[derive(Error, Debug)]
pub enum GateError {
    /// The commit message is empty once surrounding whitespace is removed.
    #[error("Commit message is empty")]
    EmptyMessage,

    /// A length limit was zero.
    #[error("Invalid {0} limit: must be a positive number of characters")]
    InvalidLimit(&'static str),

    /// The imperative mood detector was handed an empty subject line.
    #[error("Subject line is empty")]
    EmptySubject,

    /// The part-of-speech tagger could not produce a usable answer.
    #[error(transparent)]
    Tagger(#[from] TaggerError),
}

/// Failures of a part-of-speech tagging engine.
#[derive(Error, Debug)]
pub enum TaggerError {
    /// The tagging engine could not be started or exited unsuccessfully.
    #[error("Tagging engine unavailable: {0}")]
    Unavailable(String),

    /// The tagging engine produced output that could not be parsed.
    #[error("Malformed tagger output: {0}")]
    Malformed(String),

    /// The tagging engine returned fewer tokens than the probe sentence contains.
    #[error("Tagger returned no tag at position {index} for {probe:?}")]
    MissingToken {
        /// The probe sentence that was tagged.
        probe: String,
        /// Index of the token that was expected.
        index: usize,
    },
}
