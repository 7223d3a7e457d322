use serde::{Deserialize, Serialize};

/// One parsed CC-CEDICT line.
///
/// Field order is the key order of the exported JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub zhuyin: String,
    pub meaning: Vec<String>,
    pub is_idiom: bool,
}

/// Result of parsing a single line: either an entry or a silent skip
/// (blank line, comment, too few headword tokens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Entry(DictEntry),
    Skip,
}

impl ParseOutcome {
    pub fn into_entry(self) -> Option<DictEntry> {
        match self {
            ParseOutcome::Entry(entry) => Some(entry),
            ParseOutcome::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ParseOutcome::Skip)
    }
}
