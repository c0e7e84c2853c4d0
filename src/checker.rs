//! Rule checker pipeline.
//!
//! Runs every [`Rule`] against one commit message, in a fixed order, and folds
//! the outcomes into a [`RuleReport`]. Rule failures never stop the pipeline;
//! only an empty message, an invalid limit, or a tagger failure do.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::check::{Outcome, RuleReport, RuleResult};
use crate::error::GateError;
use crate::message::CommitMessage;
use crate::mood::ImperativeMoodDetector;
use crate::rules::{self, Rule};
use crate::tagging::Tagger;

/// Default maximum subject line length.
pub const DEFAULT_SUBJECT_LIMIT: usize = 50;

/// Default maximum length of any message line.
pub const DEFAULT_BODY_LIMIT: usize = 72;

/// Length limits applied by the checker, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum subject line length.
    pub subject: usize,
    /// Maximum length of every line of the message.
    pub body: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT_LIMIT,
            body: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Limits {
    /// Creates limits, rejecting zero values.
    pub fn new(subject: usize, body: usize) -> Result<Self, GateError> {
        let limits = Self { subject, body };
        limits.validate()?;
        Ok(limits)
    }

    /// Checks that both limits are positive.
    pub fn validate(&self) -> Result<(), GateError> {
        if self.subject == 0 {
            return Err(GateError::InvalidLimit("subject"));
        }
        if self.body == 0 {
            return Err(GateError::InvalidLimit("body"));
        }
        Ok(())
    }
}

/// Receives each rule result as soon as it is known.
pub trait RuleObserver {
    /// Called once per rule, in evaluation order.
    fn observe(&mut self, result: &RuleResult);
}

impl<F: FnMut(&RuleResult)> RuleObserver for F {
    fn observe(&mut self, result: &RuleResult) {
        self(result);
    }
}

/// Evaluates commit messages against the seven rules.
pub struct RuleChecker<'a> {
    tagger: &'a dyn Tagger,
    limits: Limits,
}

impl<'a> RuleChecker<'a> {
    /// Creates a checker using `tagger` for the imperative mood rule.
    pub fn new(tagger: &'a dyn Tagger, limits: Limits) -> Self {
        Self { tagger, limits }
    }

    /// Returns the limits in effect.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Evaluates `message` and returns the report.
    pub fn evaluate(&self, message: &str) -> Result<RuleReport, GateError> {
        self.evaluate_with(message, &mut |_: &RuleResult| {})
    }

    /// Evaluates `message`, handing each result to `observer` as it is produced.
    pub fn evaluate_with(
        &self,
        message: &str,
        observer: &mut dyn RuleObserver,
    ) -> Result<RuleReport, GateError> {
        self.limits.validate()?;
        let message = CommitMessage::new(message)?;

        let mut results = Vec::with_capacity(Rule::ALL.len());
        for rule in Rule::ALL {
            let outcome = self.outcome(rule, &message)?;
            debug!(rule = rule.id(), %outcome, "Rule evaluated");

            let result = RuleResult::new(rule, rule.describe(&self.limits), outcome);
            observer.observe(&result);
            results.push(result);
        }

        Ok(RuleReport::new(self.limits, results))
    }

    fn outcome(&self, rule: Rule, message: &CommitMessage) -> Result<Outcome, GateError> {
        let outcome = match rule {
            Rule::SubjectBodySeparation => rules::subject_body_separation(message),
            Rule::SubjectLength => rules::subject_length(message, self.limits.subject),
            Rule::SubjectCapitalized => rules::subject_capitalized(message),
            Rule::SubjectNoPeriod => rules::subject_no_period(message),
            Rule::ImperativeMood => Outcome::from_bool(
                ImperativeMoodDetector::new(self.tagger).is_imperative(message.subject())?,
            ),
            Rule::BodyLineLength => rules::body_line_length(message, self.limits.body),
            Rule::WhatAndWhy => rules::what_and_why(message),
        };
        Ok(outcome)
    }
}

/// Evaluates `message` with the given limits.
pub fn evaluate(
    tagger: &dyn Tagger,
    message: &str,
    subject_limit: usize,
    body_limit: usize,
) -> Result<RuleReport, GateError> {
    RuleChecker::new(tagger, Limits::new(subject_limit, body_limit)?).evaluate(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::LexiconTagger;
    use crate::test_utils::{FixtureTagger, UnavailableTagger};

    fn outcomes(report: &RuleReport) -> Vec<Outcome> {
        report.results.iter().map(|r| r.outcome).collect()
    }

    #[test]
    fn lowercase_subject_fails_capitalization_only() {
        let tagger = LexiconTagger::new();
        let report = evaluate(&tagger, "add feature", 50, 72).unwrap();

        assert!(!report.passed);
        assert_eq!(report.results.len(), 7);
        assert_eq!(
            report.results.iter().map(|r| r.rule).collect::<Vec<_>>(),
            Rule::ALL.to_vec()
        );
        assert_eq!(
            outcomes(&report),
            vec![
                Outcome::NotApplicable,
                Outcome::Passed,
                Outcome::Failed,
                Outcome::Passed,
                Outcome::Passed,
                Outcome::Passed,
                Outcome::NotApplicable,
            ]
        );
    }

    #[test]
    fn well_formed_message_passes() {
        let tagger = LexiconTagger::new();
        let report = evaluate(
            &tagger,
            "Add this cool feature\n\nThis cool feature is implemented because X and Y.",
            50,
            72,
        )
        .unwrap();

        assert!(report.passed);
        let separation = report.result(Rule::SubjectBodySeparation).unwrap();
        assert!(separation.passed());
        assert!(!separation.not_applicable());
    }

    #[test]
    fn missing_blank_line_fails() {
        let tagger = LexiconTagger::new();
        let report = evaluate(&tagger, "Add feature\nBody text", 50, 72).unwrap();
        assert_eq!(
            report.result(Rule::SubjectBodySeparation).map(|r| r.outcome),
            Some(Outcome::Failed)
        );
        assert!(!report.passed);
    }

    #[test]
    fn long_body_line_fails() {
        let tagger = LexiconTagger::new();
        let message = format!("Add feature\n\n{}", "y".repeat(90));
        let report = evaluate(&tagger, &message, 50, 72).unwrap();
        assert_eq!(
            report.result(Rule::BodyLineLength).map(|r| r.outcome),
            Some(Outcome::Failed)
        );
    }

    #[test]
    fn observer_sees_every_rule_in_order() {
        let tagger = LexiconTagger::new();
        let checker = RuleChecker::new(&tagger, Limits::default());
        let mut seen = Vec::new();
        let report = checker
            .evaluate_with("Fix bug", &mut |r: &RuleResult| seen.push(r.rule))
            .unwrap();

        assert_eq!(seen, Rule::ALL.to_vec());
        assert!(report.passed);
    }

    #[test]
    fn rule_names_carry_limits() {
        let tagger = LexiconTagger::new();
        let report = evaluate(&tagger, "Fix bug", 60, 80).unwrap();
        assert_eq!(
            report.results[1].name,
            "Limit the subject line to 60 characters"
        );
        assert_eq!(report.results[5].name, "Wrap the body at 80 characters");
        assert_eq!(report.limits, Limits { subject: 60, body: 80 });
    }

    #[test]
    fn empty_message_is_an_error() {
        let tagger = LexiconTagger::new();
        assert!(matches!(
            evaluate(&tagger, " \n\t", 50, 72),
            Err(GateError::EmptyMessage)
        ));
    }

    #[test]
    fn zero_limit_is_an_error() {
        let tagger = LexiconTagger::new();
        assert!(matches!(
            evaluate(&tagger, "Fix bug", 0, 72),
            Err(GateError::InvalidLimit("subject"))
        ));
        assert!(matches!(
            evaluate(&tagger, "Fix bug", 50, 0),
            Err(GateError::InvalidLimit("body"))
        ));
    }

    #[test]
    fn tagger_failure_aborts_evaluation() {
        let checker = RuleChecker::new(&UnavailableTagger, Limits::default());
        let mut seen = 0;
        let result = checker.evaluate_with("Fix bug", &mut |_: &RuleResult| seen += 1);

        assert!(matches!(result, Err(GateError::Tagger(_))));
        assert_eq!(seen, 4);
    }

    #[test]
    fn mood_rule_uses_the_subject_line_only() {
        let tagger = FixtureTagger::new()
            .with("It fixed bug", &[("It", "PRP"), ("fixed", "VBD"), ("bug", "NN")])
            .with("You fixed bug", &[("You", "PRP"), ("fixed", "VBD"), ("bug", "NN")]);
        let calls = tagger.calls();
        let report = RuleChecker::new(&tagger, Limits::default())
            .evaluate("Fixed bug\n\nFix the body too")
            .unwrap();

        assert_eq!(
            report.result(Rule::ImperativeMood).map(|r| r.outcome),
            Some(Outcome::Failed)
        );
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn subject_length_boundary(limit in 1_usize..120) {
                let tagger = LexiconTagger::new();
                let exact = format!("F{}", "x".repeat(limit - 1));
                let over = format!("{exact}x");

                let report = evaluate(&tagger, &exact, limit, 200).unwrap();
                prop_assert_eq!(
                    report.result(Rule::SubjectLength).map(|r| r.outcome),
                    Some(Outcome::Passed)
                );
                let report = evaluate(&tagger, &over, limit, 200).unwrap();
                prop_assert_eq!(
                    report.result(Rule::SubjectLength).map(|r| r.outcome),
                    Some(Outcome::Failed)
                );
            }

            #[test]
            fn evaluation_is_idempotent(message in "[A-Za-z][A-Za-z .\n]{0,80}") {
                let tagger = LexiconTagger::new();
                let first = evaluate(&tagger, &message, 50, 72).unwrap();
                let second = evaluate(&tagger, &message, 50, 72).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn well_shaped_single_line_subjects(subject in "[A-Z][a-z ]{0,40}[a-z]") {
                let tagger = LexiconTagger::new();
                let report = evaluate(&tagger, &subject, 50, 72).unwrap();
                prop_assert_eq!(
                    report.result(Rule::SubjectBodySeparation).map(|r| r.outcome),
                    Some(Outcome::NotApplicable)
                );
                prop_assert_eq!(
                    report.result(Rule::SubjectCapitalized).map(|r| r.outcome),
                    Some(Outcome::Passed)
                );
                prop_assert_eq!(
                    report.result(Rule::SubjectNoPeriod).map(|r| r.outcome),
                    Some(Outcome::Passed)
                );
            }
        }
    }
}
