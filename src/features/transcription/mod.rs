pub mod engine;
pub mod zhuyin;

use std::fmt;

use crate::data::models::TranscriptionError;

pub use engine::PinyinEngine;
pub use zhuyin::syllable_to_zhuyin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Tone-marked pinyin, e.g. `nǐ hǎo`
    Pinyin,
    /// Bopomofo, e.g. `ㄋㄧˇ ㄏㄠˇ`
    Zhuyin,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Pinyin => f.write_str("pinyin"),
            Style::Zhuyin => f.write_str("zhuyin"),
        }
    }
}

/// Maps a run of Chinese characters to a phonetic transcription.
///
/// Implementations return one token per recognized character, joined with
/// single spaces, in character order. An empty input yields an empty string.
pub trait Transliterator {
    fn transcribe(&self, characters: &str, style: Style) -> Result<String, TranscriptionError>;
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn transcribe(&self, characters: &str, style: Style) -> Result<String, TranscriptionError> {
        (**self).transcribe(characters, style)
    }
}

impl<T: Transliterator + ?Sized> Transliterator for Box<T> {
    fn transcribe(&self, characters: &str, style: Style) -> Result<String, TranscriptionError> {
        (**self).transcribe(characters, style)
    }
}
