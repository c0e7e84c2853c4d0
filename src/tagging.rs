//! Part-of-speech tagging adapters.
//!
//! The imperative mood detector only needs a [`Tagger`] that turns a short
//! English sentence into `(token, label)` pairs. Two implementations ship with
//! the crate:
//!
//! - [`LexiconTagger`]: a built-in lexicon and suffix based tagger.
//! - [`CommandTagger`]: delegates to an external tagging program.
//!
//! Labels follow the Penn Treebank tag set. Any tagger that distinguishes
//! [`PosTag::Vbz`] from [`PosTag::Vbp`] is substitutable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaggerError;

pub mod command;
pub mod lexicon;

pub use command::CommandTagger;
pub use lexicon::LexiconTagger;

/// A Penn Treebank part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PosTag {
    /// Coordinating conjunction.
    Cc,
    /// Cardinal number.
    Cd,
    /// Determiner.
    Dt,
    /// Preposition or subordinating conjunction.
    In,
    /// Adjective.
    Jj,
    /// Modal.
    Md,
    /// Noun, singular or mass.
    Nn,
    /// Noun, plural.
    Nns,
    /// Proper noun, singular.
    Nnp,
    /// Personal pronoun.
    Prp,
    /// Possessive pronoun.
    PrpPossessive,
    /// Adverb.
    Rb,
    /// "to".
    To,
    /// Verb, base form.
    Vb,
    /// Verb, past tense.
    Vbd,
    /// Verb, gerund or present participle.
    Vbg,
    /// Verb, past participle.
    Vbn,
    /// Verb, non-third-person singular present.
    Vbp,
    /// Verb, third-person singular present.
    Vbz,
    /// Sentence-final punctuation.
    Period,
    /// Comma.
    Comma,
    /// Colon or semicolon.
    Colon,
    /// Any other symbol.
    Sym,
    /// A label outside the set above, kept verbatim.
    Other(String),
}

impl PosTag {
    /// Returns the Penn Treebank spelling of the label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cc => "CC",
            Self::Cd => "CD",
            Self::Dt => "DT",
            Self::In => "IN",
            Self::Jj => "JJ",
            Self::Md => "MD",
            Self::Nn => "NN",
            Self::Nns => "NNS",
            Self::Nnp => "NNP",
            Self::Prp => "PRP",
            Self::PrpPossessive => "PRP$",
            Self::Rb => "RB",
            Self::To => "TO",
            Self::Vb => "VB",
            Self::Vbd => "VBD",
            Self::Vbg => "VBG",
            Self::Vbn => "VBN",
            Self::Vbp => "VBP",
            Self::Vbz => "VBZ",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Sym => "SYM",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Returns true for any verb label.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Self::Vb | Self::Vbd | Self::Vbg | Self::Vbn | Self::Vbp | Self::Vbz
        )
    }

    /// Parses a label as written by a tagging engine.
    ///
    /// Unknown labels are kept as [`PosTag::Other`].
    pub fn parse(label: &str) -> Self {
        match label {
            "CC" => Self::Cc,
            "CD" => Self::Cd,
            "DT" => Self::Dt,
            "IN" => Self::In,
            "JJ" => Self::Jj,
            "MD" => Self::Md,
            "NN" => Self::Nn,
            "NNS" => Self::Nns,
            "NNP" => Self::Nnp,
            "PRP" => Self::Prp,
            "PRP$" => Self::PrpPossessive,
            "RB" => Self::Rb,
            "TO" => Self::To,
            "VB" => Self::Vb,
            "VBD" => Self::Vbd,
            "VBG" => Self::Vbg,
            "VBN" => Self::Vbn,
            "VBP" => Self::Vbp,
            "VBZ" => Self::Vbz,
            "." => Self::Period,
            "," => Self::Comma,
            ":" => Self::Colon,
            "SYM" => Self::Sym,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl From<String> for PosTag {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

/// A token together with the label the tagger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The token as it appeared in the tagged text.
    pub token: String,
    /// The assigned part-of-speech label.
    pub label: PosTag,
}

impl Tag {
    /// Creates a new tag.
    pub fn new(token: impl Into<String>, label: PosTag) -> Self {
        Self {
            token: token.into(),
            label,
        }
    }
}

/// A part-of-speech tagging engine.
///
/// Implementations must not retain state between calls that would change the
/// answer for the same input.
pub trait Tagger {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Tags `text`, returning one entry per token in input order.
    fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError>;
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError> {
        (**self).tag(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_strings() {
        for label in ["VBZ", "VBP", "NN", "PRP$", ".", "SYM"] {
            assert_eq!(PosTag::parse(label).as_str(), label);
        }
    }

    #[test]
    fn unknown_label_kept_verbatim() {
        let tag = PosTag::parse("WRB");
        assert_eq!(tag, PosTag::Other("WRB".to_string()));
        assert_eq!(tag.to_string(), "WRB");
        assert!(!tag.is_verb());
    }

    #[test]
    fn third_person_and_base_form_are_distinct() {
        assert_ne!(PosTag::parse("VBZ"), PosTag::parse("VBP"));
        assert!(PosTag::Vbz.is_verb());
        assert!(PosTag::Vbp.is_verb());
    }

    #[test]
    fn tag_serializes_label_as_string() {
        let tag = Tag::new("fix", PosTag::Vbp);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"token":"fix","label":"VBP"}"#);
    }
}
