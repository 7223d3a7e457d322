use std::fmt;
use std::path::PathBuf;

use crate::data::models::DictEntry;

/// A recovered per-line fault, keyed by its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    pub line_number: usize,
    pub message: String,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.message)
    }
}

/// Everything one pass over a dictionary source produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<DictEntry>,
    pub warnings: Vec<LineWarning>,
    pub lines_read: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn push_entry(&mut self, entry: DictEntry) {
        self.lines_read += 1;
        self.entries.push(entry);
    }

    pub fn push_skip(&mut self) {
        self.lines_read += 1;
        self.skipped += 1;
    }

    pub fn push_warning(&mut self, line_number: usize, message: impl Into<String>) {
        self.lines_read += 1;
        self.warnings.push(LineWarning {
            line_number,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts reported back to the caller after a file has been converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub entries: usize,
    pub warnings: usize,
    pub lines_read: usize,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn from_report(report: &BatchReport, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            entries: report.entries.len(),
            warnings: report.warnings.len(),
            lines_read: report.lines_read,
            skipped: report.skipped,
        }
    }
}
