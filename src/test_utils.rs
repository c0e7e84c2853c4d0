//! Shared test utilities.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::TaggerError;
use crate::tagging::{PosTag, Tag, Tagger};

/// Tagger that answers from a fixed table of exact input texts.
///
/// Every call is recorded so tests can assert which probe sentences were
/// built. Inputs missing from the table produce
/// [`TaggerError::Malformed`].
pub(crate) struct FixtureTagger {
    fixtures: HashMap<String, Vec<Tag>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FixtureTagger {
    /// Creates an empty fixture tagger.
    pub(crate) fn new() -> Self {
        Self {
            fixtures: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers the tags to return for `text`, given as `(token, label)` pairs.
    pub(crate) fn with(mut self, text: &str, tags: &[(&str, &str)]) -> Self {
        let tags = tags
            .iter()
            .map(|(token, label)| Tag::new(*token, PosTag::parse(label)))
            .collect();
        self.fixtures.insert(text.to_string(), tags);
        self
    }

    /// Returns a handle on the recorded calls.
    pub(crate) fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

impl Tagger for FixtureTagger {
    fn name(&self) -> &str {
        "fixture"
    }

    fn tag(&self, text: &str) -> Result<Vec<Tag>, TaggerError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.fixtures
            .get(text)
            .cloned()
            .ok_or_else(|| TaggerError::Malformed(format!("no fixture for {text:?}")))
    }
}

/// Tagger that is never available.
pub(crate) struct UnavailableTagger;

impl Tagger for UnavailableTagger {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn tag(&self, _text: &str) -> Result<Vec<Tag>, TaggerError> {
        Err(TaggerError::Unavailable("tagger is offline".to_string()))
    }
}
