//! Terminal rendering for check results.
//!
//! All functions write to a [`WriteColor`] so the same code serves colored
//! terminals, plain pipes and tests.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::data::check::{Outcome, RuleReport, RuleResult};
use crate::mood::MoodAnalysis;
use crate::tagging::Tag;

const RULE: &str = "===========================";

/// Returns the fixed-width label and color for an outcome.
pub(crate) fn outcome_label(outcome: Outcome) -> (&'static str, Color) {
    match outcome {
        Outcome::Passed => ("PASSED", Color::Green),
        Outcome::Failed => ("FAILED", Color::Red),
        Outcome::NotApplicable => ("  NA  ", Color::Blue),
    }
}

fn write_header(out: &mut dyn WriteColor, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()?;
    writeln!(out)
}

/// Echoes the message under check and introduces the rule lines.
pub(crate) fn write_preamble(out: &mut dyn WriteColor, message: &str) -> io::Result<()> {
    write_header(out, "Your commit message:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", message.trim())?;
    writeln!(out, "{RULE}")?;
    write_header(out, "Conformance to the 7 rules of a great Git commit message:")
}

/// Writes one `[OUTCOME] rule name` line.
pub(crate) fn write_rule_line(out: &mut dyn WriteColor, result: &RuleResult) -> io::Result<()> {
    let (label, color) = outcome_label(result.outcome);
    write!(out, "[")?;
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{label}")?;
    out.reset()?;
    writeln!(out, "] {}", result.name)
}

/// Formats the closing verdict line.
pub(crate) fn format_verdict(report: &RuleReport) -> String {
    let failed = report.failures().count();
    if failed == 0 {
        "All rules satisfied".to_string()
    } else {
        format!("{failed} of {} rules failed", report.results.len())
    }
}

/// Writes the verdict line, colored by the aggregate result.
pub(crate) fn write_verdict(out: &mut dyn WriteColor, report: &RuleReport) -> io::Result<()> {
    let color = if report.passed { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", format_verdict(report))?;
    out.reset()?;
    writeln!(out)
}

/// Writes how the imperative mood rule reached its verdict.
pub(crate) fn write_mood_analysis(
    out: &mut dyn WriteColor,
    analysis: &MoodAnalysis,
) -> io::Result<()> {
    writeln!(out, "Leading word: {}", analysis.leading_word)?;
    writeln!(
        out,
        "  {:?} -> {}",
        analysis.third_person_probe, analysis.third_person_tag
    )?;
    writeln!(
        out,
        "  {:?} -> {}",
        analysis.non_third_person_probe, analysis.non_third_person_tag
    )?;
    writeln!(
        out,
        "Imperative: {}",
        if analysis.imperative { "yes" } else { "no" }
    )
}

/// Formats tags as `token<TAB>label` lines.
pub(crate) fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| format!("{}\t{}\n", tag.token, tag.label))
        .collect()
}
