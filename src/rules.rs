//! The seven rules of a great Git commit message.
//!
//! Each rule is a stateless predicate over a [`CommitMessage`]. The imperative
//! mood rule needs a tagger and is evaluated by the
//! [`RuleChecker`](crate::checker::RuleChecker) through
//! [`ImperativeMoodDetector`](crate::mood::ImperativeMoodDetector).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::Limits;
use crate::data::check::Outcome;
use crate::message::{char_len, CommitMessage};

/// Identifies one of the seven rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Separate subject from body with a blank line.
    SubjectBodySeparation,
    /// Limit the subject line length.
    SubjectLength,
    /// Capitalize the subject line.
    SubjectCapitalized,
    /// Do not end the subject line with a period.
    SubjectNoPeriod,
    /// Use the imperative mood in the subject line.
    ImperativeMood,
    /// Wrap the body at a fixed width.
    BodyLineLength,
    /// Use the body to explain what and why vs. how.
    WhatAndWhy,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Self; 7] = [
        Self::SubjectBodySeparation,
        Self::SubjectLength,
        Self::SubjectCapitalized,
        Self::SubjectNoPeriod,
        Self::ImperativeMood,
        Self::BodyLineLength,
        Self::WhatAndWhy,
    ];

    /// Returns the stable identifier used in serialized reports.
    pub fn id(self) -> &'static str {
        match self {
            Self::SubjectBodySeparation => "subject-body-separation",
            Self::SubjectLength => "subject-length",
            Self::SubjectCapitalized => "subject-capitalized",
            Self::SubjectNoPeriod => "subject-no-period",
            Self::ImperativeMood => "imperative-mood",
            Self::BodyLineLength => "body-line-length",
            Self::WhatAndWhy => "what-and-why",
        }
    }

    /// Returns the checklist wording of the rule for the given limits.
    pub fn describe(self, limits: &Limits) -> String {
        match self {
            Self::SubjectBodySeparation => {
                "Separate subject from body with a blank line".to_string()
            }
            Self::SubjectLength => {
                format!("Limit the subject line to {} characters", limits.subject)
            }
            Self::SubjectCapitalized => "Capitalize the subject line".to_string(),
            Self::SubjectNoPeriod => "Do not end the subject line with a period".to_string(),
            Self::ImperativeMood => "Use the imperative mood in the subject line".to_string(),
            Self::BodyLineLength => format!("Wrap the body at {} characters", limits.body),
            Self::WhatAndWhy => "Use the body to explain what and why vs. how".to_string(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Passes when the second line is blank; not applicable to single-line messages.
pub fn subject_body_separation(message: &CommitMessage) -> Outcome {
    match message.second_line() {
        Some(line) => Outcome::from_bool(line.is_empty()),
        None => Outcome::NotApplicable,
    }
}

/// Passes when the subject is at most `limit` characters long.
pub fn subject_length(message: &CommitMessage, limit: usize) -> Outcome {
    Outcome::from_bool(char_len(message.subject()) <= limit)
}

/// Passes when the subject starts with an uppercase letter.
pub fn subject_capitalized(message: &CommitMessage) -> Outcome {
    Outcome::from_bool(
        message
            .subject()
            .chars()
            .next()
            .is_some_and(char::is_uppercase),
    )
}

/// Passes when the subject does not end with a period.
pub fn subject_no_period(message: &CommitMessage) -> Outcome {
    Outcome::from_bool(!message.subject().ends_with('.'))
}

/// Passes when no line of the message exceeds `limit` characters.
///
/// Every line is measured, the subject included.
pub fn body_line_length(message: &CommitMessage, limit: usize) -> Outcome {
    Outcome::from_bool(message.lines().iter().all(|line| char_len(line) <= limit))
}

/// Whether the body explains what and why is left to human review.
pub fn what_and_why(_message: &CommitMessage) -> Outcome {
    Outcome::NotApplicable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> CommitMessage {
        CommitMessage::new(text).unwrap()
    }

    #[test]
    fn separated_body_passes() {
        assert_eq!(
            subject_body_separation(&msg("Add feature\n\nBody text")),
            Outcome::Passed
        );
    }

    #[test]
    fn unseparated_body_fails() {
        assert_eq!(
            subject_body_separation(&msg("Add feature\nBody text")),
            Outcome::Failed
        );
    }

    #[test]
    fn single_line_separation_not_applicable() {
        assert_eq!(
            subject_body_separation(&msg("Add feature")),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn subject_length_boundary() {
        let exact = "A".repeat(50);
        assert_eq!(subject_length(&msg(&exact), 50), Outcome::Passed);
        let over = "A".repeat(51);
        assert_eq!(subject_length(&msg(&over), 50), Outcome::Failed);
    }

    #[test]
    fn subject_length_counts_characters() {
        assert_eq!(subject_length(&msg("Ünïcödé"), 7), Outcome::Passed);
    }

    #[test]
    fn long_subject_fails() {
        let text =
            "This is a very very very, really long, humongous subject for a commit message";
        assert_eq!(subject_length(&msg(text), 60), Outcome::Failed);
        assert_eq!(
            subject_length(&msg("Add this neat commit message"), 60),
            Outcome::Passed
        );
    }

    #[test]
    fn capitalization() {
        assert_eq!(
            subject_capitalized(&msg("Add this cool new feature")),
            Outcome::Passed
        );
        assert_eq!(
            subject_capitalized(&msg("add this weird-looking commit message")),
            Outcome::Failed
        );
        assert_eq!(subject_capitalized(&msg("1.0 release")), Outcome::Failed);
        assert_eq!(subject_capitalized(&msg("Écrire docs")), Outcome::Passed);
    }

    #[test]
    fn trailing_period() {
        assert_eq!(
            subject_no_period(&msg("I am a strange person and do such things.")),
            Outcome::Failed
        );
        assert_eq!(
            subject_no_period(&msg(
                "I am a strange person and don't end commit messages with a period"
            )),
            Outcome::Passed
        );
    }

    #[test]
    fn period_only_checked_on_subject() {
        assert_eq!(
            subject_no_period(&msg("Add feature\n\nExplain it.")),
            Outcome::Passed
        );
    }

    #[test]
    fn body_lines_too_long() {
        let text = format!("Add this cool new feature\n\nBut damn...\n{}", "x".repeat(90));
        assert_eq!(body_line_length(&msg(&text), 72), Outcome::Failed);
    }

    #[test]
    fn body_lines_within_limit() {
        let text = "Add this cool new feature\n\nAnd nicely explain why it was added.";
        assert_eq!(body_line_length(&msg(text), 72), Outcome::Passed);
    }

    #[test]
    fn body_limit_includes_subject() {
        let text = "x".repeat(80);
        assert_eq!(body_line_length(&msg(&text), 72), Outcome::Failed);
    }

    #[test]
    fn what_and_why_never_fails() {
        assert_eq!(
            what_and_why(&msg("Something that does not matter")),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn rule_wording_includes_limits() {
        let limits = Limits {
            subject: 60,
            body: 80,
        };
        assert_eq!(
            Rule::SubjectLength.describe(&limits),
            "Limit the subject line to 60 characters"
        );
        assert_eq!(
            Rule::BodyLineLength.describe(&limits),
            "Wrap the body at 80 characters"
        );
    }

    #[test]
    fn ids_match_serialized_form() {
        for rule in Rule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.id()));
        }
    }
}
