//! CC-CEDICT to JSON conversion.
//!
//! [`LineParser`] turns one dictionary line into a [`DictEntry`],
//! [`BatchProcessor`] drives it over a whole source with per-line fault
//! isolation, and [`convert_file`] wires that to the file system.

pub mod data;
pub mod features;
pub mod pipeline;
pub mod utils;

pub use data::models::{
    BatchReport, CedictError, ConversionSummary, DictEntry, LineError, LineWarning, ParseOutcome,
    TranscriptionError,
};
pub use features::parser::{BatchProcessor, LineParser};
pub use features::transcription::{PinyinEngine, Style, Transliterator};
pub use pipeline::convert_file;
