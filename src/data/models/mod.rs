pub mod batch_models;
pub mod entry_models;
pub mod error_models;

pub use batch_models::{BatchReport, ConversionSummary, LineWarning};
pub use entry_models::{DictEntry, ParseOutcome};
pub use error_models::{CedictError, LineError, TranscriptionError};
