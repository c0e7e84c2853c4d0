//! Imperative mood detection for subject lines.
//!
//! General-purpose taggers expect a sentence with a subject, so a bare
//! fragment like "Fixes bug" is easily read as a noun phrase. The detector
//! tags two probe sentences built by putting a pronoun in front of the
//! subject line:
//!
//! - "It fixes bug" asks whether the leading word reads as a third-person
//!   singular present verb (`VBZ`).
//! - "You fixes bug" asks whether it reads as a base-form present verb (`VBP`).
//!
//! The leading word is imperative when the second probe yields `VBP` and
//! either the first probe does not yield `VBZ` or the word does not end in
//! "s". The trailing "s" check settles words the tagger reads inconsistently
//! between the two probes.
//!
//! Known limitations: imperative verbs ending in "s" ("Focus", "Discuss")
//! can still be rejected when the tagger reads them as `VBZ`, third-person
//! forms without a trailing "s" slip through the tie-break, and programming
//! vocabulary that doubles as nouns ("Release", "Build") depends entirely on
//! the tagger.
//!
//! The built-in [`LexiconTagger`](crate::tagging::LexiconTagger) does not
//! check pronoun agreement: a word after "It" gets the same label as after
//! "You", so with it the third-person probe and the trailing "s" tie-break
//! never change a verdict. They only matter with an external tagger that
//! reads the two sentences differently.

use serde::Serialize;
use tracing::debug;

use crate::error::{GateError, TaggerError};
use crate::tagging::{PosTag, Tag, Tagger};

/// Prefix of the probe that invites a third-person singular reading.
pub const THIRD_PERSON_PREFIX: &str = "It ";

/// Prefix of the probe that invites a base-form reading.
pub const NON_THIRD_PERSON_PREFIX: &str = "You ";

/// How the detector reached its verdict for one subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodAnalysis {
    /// The leading word as tokenized in the third-person probe.
    pub leading_word: String,
    /// The third-person probe sentence.
    pub third_person_probe: String,
    /// Label of the leading word in the third-person probe.
    pub third_person_tag: PosTag,
    /// The non-third-person probe sentence.
    pub non_third_person_probe: String,
    /// Label of the leading word in the non-third-person probe.
    pub non_third_person_tag: PosTag,
    /// Whether the subject line is judged to be in the imperative mood.
    pub imperative: bool,
}

/// Decides whether a subject line starts with an imperative verb.
pub struct ImperativeMoodDetector<'a> {
    tagger: &'a dyn Tagger,
}

impl<'a> ImperativeMoodDetector<'a> {
    /// Creates a detector that consults `tagger`.
    pub fn new(tagger: &'a dyn Tagger) -> Self {
        Self { tagger }
    }

    /// Returns true if `subject` is phrased in the imperative mood.
    ///
    /// Tagger failures are returned as errors, never as a verdict.
    pub fn is_imperative(&self, subject: &str) -> Result<bool, GateError> {
        Ok(self.analyze(subject)?.imperative)
    }

    /// Runs both probes and returns the full analysis.
    pub fn analyze(&self, subject: &str) -> Result<MoodAnalysis, GateError> {
        if subject.trim().is_empty() {
            return Err(GateError::EmptySubject);
        }

        let normalized = lowercase_first_char(subject);
        let (third_person_probe, third) =
            probe(self.tagger, THIRD_PERSON_PREFIX, &normalized)?;
        let (non_third_person_probe, non_third) =
            probe(self.tagger, NON_THIRD_PERSON_PREFIX, &normalized)?;

        let imperative = decide(&third.label, &non_third.label, &third.token);
        debug!(
            word = %third.token,
            third_person = %third.label,
            non_third_person = %non_third.label,
            imperative,
            "Imperative mood probes tagged"
        );

        Ok(MoodAnalysis {
            leading_word: third.token,
            third_person_probe,
            third_person_tag: third.label,
            non_third_person_probe,
            non_third_person_tag: non_third.label,
            imperative,
        })
    }
}

/// Applies the dual-probe decision rule to the leading word's two labels.
pub fn decide(third_person: &PosTag, non_third_person: &PosTag, leading_word: &str) -> bool {
    *non_third_person == PosTag::Vbp
        && (*third_person != PosTag::Vbz || !leading_word.ends_with(['s', 'S']))
}

/// Lowercases only the first character, leaving the rest of the line intact.
fn lowercase_first_char(subject: &str) -> String {
    let mut chars = subject.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tags `prefix + subject` and returns the probe with the tag of the word
/// right after the prefix.
fn probe(tagger: &dyn Tagger, prefix: &str, subject: &str) -> Result<(String, Tag), TaggerError> {
    let sentence = format!("{prefix}{subject}");
    let index = prefix.split_whitespace().count();
    let tags = tagger.tag(&sentence)?;
    debug!("{} tagged {sentence:?} as {tags:?}", tagger.name());

    match tags.into_iter().nth(index) {
        Some(tag) => Ok((sentence, tag)),
        None => Err(TaggerError::MissingToken {
            probe: sentence,
            index,
        }),
    }
}
