use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::features::transcription::Style;

// Raised by a transliteration oracle
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("cannot transcribe {characters:?} as {style}")]
    Unsupported { characters: String, style: Style },
    #[error("transliteration engine failed: {0}")]
    Engine(String),
}

// Faults confined to a single line; the batch turns them into warnings
#[derive(Error, Debug)]
pub enum LineError {
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error("parser panicked: {0}")]
    Panicked(String),
}

// File-level conditions that abort a conversion
#[derive(Error, Debug)]
pub enum CedictError {
    #[error("Input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("Error reading file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No valid entries found in '{}'", .0.display())]
    NoEntries(PathBuf),
    #[error("Error writing to output file '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
}
