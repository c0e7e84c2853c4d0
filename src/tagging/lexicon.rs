//! Built-in lexicon and suffix based part-of-speech tagger.
//!
//! Good enough for the short, subject-prefixed probe sentences the mood
//! detector builds: closed-class words come from a fixed lexicon, irregular
//! verbs from a table, and everything else from its position and suffix.

use std::sync::LazyLock;

use regex::Regex;

use super::{PosTag, Tag, Tagger};
use crate::error::TaggerError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:[-'.]\w+)*|[^\w\s]").unwrap());

/// Irregular verbs as `(base, past, past participle)`.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("broadcast", "broadcast", "broadcast"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("cast", "cast", "cast"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("cling", "clung", "clung"),
    ("come", "came", "come"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("dwell", "dwelt", "dwelt"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fling", "flung", "flung"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grind", "ground", "ground"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("hurt", "hurt", "hurt"),
    ("keep", "kept", "kept"),
    ("kneel", "knelt", "knelt"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("let", "let", "let"),
    ("light", "lit", "lit"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("mislead", "misled", "misled"),
    ("overcome", "overcame", "overcome"),
    ("override", "overrode", "overridden"),
    ("oversee", "oversaw", "overseen"),
    ("overwrite", "overwrote", "overwritten"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("read", "read", "read"),
    ("rebuild", "rebuilt", "rebuilt"),
    ("redo", "redid", "redone"),
    ("remake", "remade", "remade"),
    ("rerun", "reran", "rerun"),
    ("reset", "reset", "reset"),
    ("rethink", "rethought", "rethought"),
    ("rewrite", "rewrote", "rewritten"),
    ("rid", "rid", "rid"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("shake", "shook", "shaken"),
    ("shed", "shed", "shed"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("shrink", "shrank", "shrunk"),
    ("shut", "shut", "shut"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("slay", "slew", "slain"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("spit", "spat", "spat"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("strike", "struck", "struck"),
    ("string", "strung", "strung"),
    ("strive", "strove", "striven"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("unbind", "unbound", "unbound"),
    ("undergo", "underwent", "undergone"),
    ("understand", "understood", "understood"),
    ("undo", "undid", "undone"),
    ("unwind", "unwound", "unwound"),
    ("uphold", "upheld", "upheld"),
    ("upset", "upset", "upset"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weave", "wove", "woven"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("wind", "wound", "wound"),
    ("withdraw", "withdrew", "withdrawn"),
    ("withhold", "withheld", "withheld"),
    ("wring", "wrung", "wrung"),
    ("write", "wrote", "written"),
];

/// Suffixes that mark a noun even where a verb is expected.
const NOMINAL_SUFFIXES: &[&str] = &[
    "tion", "tions", "sion", "sions", "ness", "ity", "ities", "ship", "hood", "ism", "isms",
    "ology", "sis",
];

/// Verbs that happen to carry a nominal suffix.
const NOMINAL_SUFFIX_VERBS: &[&str] = &[
    "caution",
    "commission",
    "condition",
    "function",
    "mention",
    "partition",
    "position",
    "provision",
    "question",
    "transition",
    "version",
];

/// Regular base forms that end in "ed".
const ED_BASE_FORMS: &[&str] = &["embed", "shred"];

const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "ful", "less", "ous", "ive"];

const ADJECTIVES: &[&str] = &[
    "big", "cool", "different", "final", "good", "bad", "great", "initial", "large", "major",
    "minor", "misc", "new", "old", "other", "same", "several", "small", "various",
];

/// Words ending in "ly" that are not adverbs.
const LY_NON_ADVERBS: &[&str] = &[
    "ally", "anomaly", "apply", "assembly", "family", "multiply", "reply", "supply",
];

/// Irregular past forms that read as nouns outside verb position ("a bit", "the ground").
const PAST_FORM_NOUNS: &[&str] = &["bit", "felt", "ground", "shot"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbForm {
    Base,
    Past,
    Participle,
}

/// Lexicon and suffix based tagger producing Penn Treebank labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Creates a new lexicon tagger.
    pub fn new() -> Self {
        Self
    }

    /// Tags `text` without going through the fallible [`Tagger`] interface.
    pub fn tag_text(&self, text: &str) -> Vec<Tag> {
        let mut tags: Vec<Tag> = Vec::new();

        for token in TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()) {
            let prev = tags.last().map(|t| &t.label);
            let sentence_start = matches!(prev, None | Some(PosTag::Period));
            let label = classify(token, prev, sentence_start);
            tags.push(Tag::new(token, label));
        }

        tags
    }
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError> {
        Ok(self.tag_text(text))
    }
}

fn classify(token: &str, prev: Option<&PosTag>, sentence_start: bool) -> PosTag {
    if let Some(tag) = punctuation(token) {
        return tag;
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return PosTag::Cd;
    }

    let lower = token.to_lowercase();
    if let Some(tag) = closed_class(&lower) {
        return tag;
    }

    match prev {
        Some(PosTag::Prp) => verb_form(&lower, false),
        Some(PosTag::Md | PosTag::To) => verb_form(&lower, true),
        _ => open_class(token, &lower, prev, sentence_start),
    }
}

fn punctuation(token: &str) -> Option<PosTag> {
    let tag = match token {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" => PosTag::Colon,
        t if t.chars().all(|c| !c.is_alphanumeric() && c != '_') => PosTag::Sym,
        _ => return None,
    };
    Some(tag)
}

fn closed_class(lower: &str) -> Option<PosTag> {
    let tag = match lower {
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them" => {
            PosTag::Prp
        }
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => PosTag::PrpPossessive,
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "each" | "every" | "some"
        | "any" | "no" | "all" | "both" => PosTag::Dt,
        "to" => PosTag::To,
        "and" | "or" | "but" | "nor" => PosTag::Cc,
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must" => {
            PosTag::Md
        }
        "is" | "has" | "does" => PosTag::Vbz,
        "are" | "am" | "have" | "do" => PosTag::Vbp,
        "was" | "were" | "had" | "did" => PosTag::Vbd,
        "be" => PosTag::Vb,
        "been" => PosTag::Vbn,
        "being" => PosTag::Vbg,
        "not" | "also" | "now" | "then" | "too" | "very" | "only" | "just" | "again"
        | "already" | "still" | "never" | "always" | "instead" => PosTag::Rb,
        "of" | "in" | "on" | "at" | "for" | "with" | "from" | "by" | "about" | "into" | "onto"
        | "over" | "under" | "after" | "before" | "between" | "through" | "during"
        | "without" | "within" | "against" | "via" | "as" | "than" | "because" | "if"
        | "since" | "while" | "per" | "across" | "upon" | "unless" | "until" | "toward"
        | "towards" => PosTag::In,
        _ => return None,
    };
    Some(tag)
}

/// Tags a word in a position where a finite verb is expected.
fn verb_form(lower: &str, after_modal: bool) -> PosTag {
    if lower
        .chars()
        .any(|c| !c.is_alphabetic() && c != '-' && c != '\'')
    {
        return PosTag::Nn;
    }
    if is_nominal(lower) {
        return PosTag::Nn;
    }
    if ADJECTIVES.contains(&lower) {
        return PosTag::Jj;
    }

    match irregular(lower) {
        Some(VerbForm::Past) => return PosTag::Vbd,
        Some(VerbForm::Participle) => return PosTag::Vbn,
        Some(VerbForm::Base) => return base_form(after_modal),
        None => {}
    }

    if is_gerund(lower) {
        PosTag::Vbg
    } else if is_regular_past(lower) {
        PosTag::Vbd
    } else if has_inflectional_s(lower) {
        PosTag::Vbz
    } else {
        base_form(after_modal)
    }
}

/// Tags a word with no verb expectation from its shape alone.
fn open_class(token: &str, lower: &str, prev: Option<&PosTag>, sentence_start: bool) -> PosTag {
    if !sentence_start && token.starts_with(char::is_uppercase) {
        return PosTag::Nnp;
    }

    let after_verb = prev.is_some_and(PosTag::is_verb);
    match irregular(lower) {
        Some(VerbForm::Past) if PAST_FORM_NOUNS.contains(&lower) => {}
        Some(VerbForm::Past) if after_verb => return PosTag::Vbn,
        Some(VerbForm::Past) => return PosTag::Vbd,
        Some(VerbForm::Participle) => return PosTag::Vbn,
        _ => {}
    }

    if ADJECTIVES.contains(&lower) || has_suffix(lower, ADJECTIVE_SUFFIXES) {
        PosTag::Jj
    } else if lower.len() > 4 && lower.ends_with("ly") && !LY_NON_ADVERBS.contains(&lower) {
        PosTag::Rb
    } else if is_gerund(lower) {
        PosTag::Vbg
    } else if is_regular_past(lower) {
        if after_verb {
            PosTag::Vbn
        } else {
            PosTag::Vbd
        }
    } else if has_inflectional_s(lower) {
        PosTag::Nns
    } else {
        PosTag::Nn
    }
}

fn base_form(after_modal: bool) -> PosTag {
    if after_modal {
        PosTag::Vb
    } else {
        PosTag::Vbp
    }
}

fn irregular(lower: &str) -> Option<VerbForm> {
    IRREGULAR_VERBS.iter().find_map(|&(base, past, participle)| {
        if lower == base {
            Some(VerbForm::Base)
        } else if lower == past {
            Some(VerbForm::Past)
        } else if lower == participle {
            Some(VerbForm::Participle)
        } else {
            None
        }
    })
}

fn has_suffix(lower: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
}

fn is_nominal(lower: &str) -> bool {
    has_suffix(lower, NOMINAL_SUFFIXES) && !NOMINAL_SUFFIX_VERBS.contains(&lower)
}

fn is_gerund(lower: &str) -> bool {
    lower.len() > 4 && lower.ends_with("ing")
}

fn is_regular_past(lower: &str) -> bool {
    lower.len() > 3
        && lower.ends_with("ed")
        && !lower.ends_with("eed")
        && !ED_BASE_FORMS.contains(&lower)
}

/// True for a trailing "s" that reads as an inflection rather than part of the stem.
fn has_inflectional_s(lower: &str) -> bool {
    lower.len() > 2
        && lower.ends_with('s')
        && !["ss", "us", "is", "as"]
            .iter()
            .any(|ending| lower.ends_with(ending))
}
