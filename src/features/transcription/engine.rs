use pinyin::ToPinyin;

use super::{Style, Transliterator, syllable_to_zhuyin};
use crate::data::models::TranscriptionError;

/// Default oracle backed by the `pinyin` crate's reading tables.
///
/// Each Han character contributes its most common reading. Runs of
/// characters without a reading (Latin letters, digits, punctuation) are
/// passed through as a single token, so `AA制` becomes `AA zhì`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinEngine;

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Syllable(&'static str),
    Passthrough(String),
}

impl PinyinEngine {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(characters: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut run = String::new();

        for c in characters.chars() {
            match c.to_pinyin() {
                Some(reading) => {
                    Self::flush(&mut run, &mut tokens);
                    tokens.push(Token::Syllable(reading.with_tone()));
                }
                None if c.is_whitespace() => Self::flush(&mut run, &mut tokens),
                None => run.push(c),
            }
        }
        Self::flush(&mut run, &mut tokens);

        tokens
    }

    fn flush(run: &mut String, tokens: &mut Vec<Token>) {
        if !run.is_empty() {
            tokens.push(Token::Passthrough(std::mem::take(run)));
        }
    }
}

impl Transliterator for PinyinEngine {
    fn transcribe(&self, characters: &str, style: Style) -> Result<String, TranscriptionError> {
        let rendered: Vec<String> = Self::tokenize(characters)
            .into_iter()
            .map(|token| match (token, style) {
                (Token::Syllable(syllable), Style::Pinyin) => syllable.to_string(),
                (Token::Syllable(syllable), Style::Zhuyin) => {
                    syllable_to_zhuyin(syllable).unwrap_or_else(|| syllable.to_string())
                }
                (Token::Passthrough(text), _) => text,
            })
            .collect();

        Ok(rendered.join(" "))
    }
}
