//! Commit message parsing.
//!
//! Lines break on `\n`, `\r\n` and a lone `\r`, and also on the vertical
//! tab, form feed, the file/group/record separators (`\x1c`-`\x1e`), NEL
//! (`\u{85}`) and the Unicode line and paragraph separators. A message
//! written with bare carriage returns therefore has as many lines as it shows.

use crate::error::GateError;

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// A commit message under evaluation.
///
/// Surrounding whitespace is removed on construction, so the subject line of
/// a `CommitMessage` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Creates a commit message from raw text.
    ///
    /// Returns [`GateError::EmptyMessage`] if nothing but whitespace remains.
    pub fn new(raw: &str) -> Result<Self, GateError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(GateError::EmptyMessage);
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Returns the trimmed message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns every line of the message, subject included.
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.text)
    }

    /// Returns the first line.
    pub fn subject(&self) -> &str {
        self.text
            .find(LINE_BREAKS)
            .map_or(self.text.as_str(), |end| &self.text[..end])
    }

    /// Returns the lines following the first blank line.
    ///
    /// Empty when the message has no blank separator line.
    pub fn body(&self) -> Vec<&str> {
        split_lines(&self.text)
            .into_iter()
            .skip_while(|line| !line.is_empty())
            .skip(1)
            .collect()
    }

    /// Returns the second line, if the message has one.
    pub fn second_line(&self) -> Option<&str> {
        split_lines(&self.text).get(1).copied()
    }
}

/// Splits `text` into lines without their terminators.
///
/// A terminator at the very end does not start another, empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Counts characters the way a reader would, not bytes.
pub(crate) fn char_len(line: &str) -> usize {
    line.chars().count()
}
