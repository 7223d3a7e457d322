use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::{DictEntry, LineError, ParseOutcome};
use crate::features::transcription::{Style, Transliterator};
use crate::utils::char_len;

lazy_static! {
    static ref BRACKETED_RE: Regex = Regex::new(r"\[.*?\]").unwrap();
}

/// Headwords at least this many code points long are flagged as idioms.
pub const IDIOM_MIN_CHARS: usize = 4;

/// Parses single CC-CEDICT lines: `TRAD SIMP [pin1 yin1] /gloss/gloss/`.
///
/// Pronunciations come from the oracle applied to the traditional headword;
/// the bracketed romanization in the source line is discarded.
pub struct LineParser<T> {
    oracle: T,
}

impl<T: Transliterator> LineParser<T> {
    pub fn new(oracle: T) -> Self {
        Self { oracle }
    }

    pub fn parse(&self, line: &str) -> Result<ParseOutcome, LineError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(ParseOutcome::Skip);
        }

        let Some((traditional, simplified, rest)) = split_headwords(line) else {
            return Ok(ParseOutcome::Skip);
        };

        let pinyin = self.transcribe(traditional, Style::Pinyin)?;
        let zhuyin = self.transcribe(traditional, Style::Zhuyin)?;
        let meaning = extract_glosses(rest);
        let is_idiom =
            char_len(traditional) >= IDIOM_MIN_CHARS || char_len(simplified) >= IDIOM_MIN_CHARS;

        Ok(ParseOutcome::Entry(DictEntry {
            traditional: traditional.to_string(),
            simplified: simplified.to_string(),
            pinyin,
            zhuyin,
            meaning,
            is_idiom,
        }))
    }

    fn transcribe(&self, characters: &str, style: Style) -> Result<String, LineError> {
        if characters.is_empty() {
            return Ok(String::new());
        }
        Ok(self.oracle.transcribe(characters, style)?)
    }
}

/// `[traditional, simplified, rest]`, or `None` if the line has fewer parts.
fn split_headwords(line: &str) -> Option<(&str, &str, &str)> {
    let (traditional, tail) = line.split_once(char::is_whitespace)?;
    let (simplified, rest) = tail.trim_start().split_once(char::is_whitespace)?;
    Some((traditional, simplified, rest.trim_start()))
}

/// Pulls the glosses out of everything after the headwords.
///
/// Bracketed spans are removed first. Whatever remains must be wrapped in
/// `/.../`, otherwise there are no glosses.
pub fn extract_glosses(rest: &str) -> Vec<String> {
    let section = BRACKETED_RE.replace_all(rest, "");

    match section.trim().strip_prefix('/').and_then(|s| s.strip_suffix('/')) {
        Some(inner) => inner
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
