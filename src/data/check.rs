//! Rule report types for commit message checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::Limits;
use crate::rules::Rule;

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The message satisfies the rule.
    Passed,
    /// The message violates the rule.
    Failed,
    /// The rule does not meaningfully apply to this message.
    NotApplicable,
}

impl Outcome {
    /// Maps a predicate result to [`Outcome::Passed`] or [`Outcome::Failed`].
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    /// Returns true unless the outcome is [`Outcome::Failed`].
    pub fn is_satisfied(self) -> bool {
        self != Self::Failed
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "PASSED"),
            Self::Failed => write!(f, "FAILED"),
            Self::NotApplicable => write!(f, "NA"),
        }
    }
}

/// Result of evaluating one rule against a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Which rule was evaluated.
    pub rule: Rule,
    /// Human-readable rule name, with limits filled in.
    pub name: String,
    /// What the rule concluded.
    pub outcome: Outcome,
}

impl RuleResult {
    /// Creates a rule result.
    pub fn new(rule: Rule, name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            rule,
            name: name.into(),
            outcome,
        }
    }

    /// Returns true only when the rule positively passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Returns true when the rule did not apply.
    #[must_use]
    pub fn not_applicable(&self) -> bool {
        self.outcome == Outcome::NotApplicable
    }

    /// Returns true when the rule does not block the message.
    #[must_use]
    pub fn satisfied(&self) -> bool {
        self.outcome.is_satisfied()
    }
}

/// Results of all rules for one commit message, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    /// Limits the message was checked against.
    pub limits: Limits,
    /// Individual rule results.
    pub results: Vec<RuleResult>,
    /// Whether every rule passed or did not apply.
    pub passed: bool,
}

impl RuleReport {
    /// Creates a report and computes the aggregate verdict.
    pub fn new(limits: Limits, results: Vec<RuleResult>) -> Self {
        let passed = results.iter().all(RuleResult::satisfied);
        Self {
            limits,
            results,
            passed,
        }
    }

    /// Returns the result for `rule`, if it was evaluated.
    pub fn result(&self, rule: Rule) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }

    /// Returns the results that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.satisfied())
    }

    /// Returns the process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown output format '{other}' (expected text, json or yaml)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
