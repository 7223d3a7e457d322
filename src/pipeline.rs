use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::data::models::{CedictError, ConversionSummary};
use crate::features::export::save_entries;
use crate::features::parser::BatchProcessor;
use crate::features::transcription::Transliterator;

/// Converts the CC-CEDICT file at `input` into a JSON array at `output`.
///
/// Per-line faults only show up in the summary's warning count. A missing
/// or unreadable input, an input without a single entry, and an unwritable
/// output are errors; in those cases nothing is written.
pub fn convert_file<T: Transliterator>(
    input: &Path,
    output: &Path,
    oracle: T,
) -> Result<ConversionSummary, CedictError> {
    if !input.exists() {
        return Err(CedictError::InputNotFound(input.to_path_buf()));
    }

    info!("Parsing CC-CEDICT file: {}", input.display());

    let read_error = |source| CedictError::Read {
        path: input.to_path_buf(),
        source,
    };
    let file = File::open(input).map_err(read_error)?;
    let report = BatchProcessor::new(oracle)
        .process_reader(BufReader::new(file))
        .map_err(read_error)?;

    if report.is_empty() {
        return Err(CedictError::NoEntries(input.to_path_buf()));
    }

    info!("Found {} entries", report.entries.len());

    save_entries(output, &report.entries)?;

    info!(
        "Successfully saved {} entries to '{}'",
        report.entries.len(),
        output.display()
    );

    Ok(ConversionSummary::from_report(&report, output))
}
