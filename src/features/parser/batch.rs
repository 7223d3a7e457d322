use std::any::Any;
use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use super::LineParser;
use crate::data::models::{BatchReport, LineError, ParseOutcome};
use crate::features::transcription::Transliterator;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Runs a [`LineParser`] over a whole dictionary source.
///
/// Each line is parsed inside its own fault boundary: a line whose parse
/// fails or panics is recorded as a warning and the pass continues with
/// the next one.
pub struct BatchProcessor<T> {
    parser: LineParser<T>,
}

impl<T: Transliterator> BatchProcessor<T> {
    pub fn new(oracle: T) -> Self {
        Self {
            parser: LineParser::new(oracle),
        }
    }

    pub fn process_lines<I, S>(&self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();
        for (idx, line) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let outcome = self.parse_isolated(line.as_ref());
            Self::record(&mut report, line_number, outcome);
        }
        Self::log_summary(&report);
        report
    }

    /// Like [`process_lines`](Self::process_lines), reading `\n`-separated
    /// lines from `reader`.
    ///
    /// The source must be UTF-8. Undecodable bytes are reported as an
    /// [`io::ErrorKind::InvalidData`] error and, like any other I/O error,
    /// end the pass.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> io::Result<BatchReport> {
        let mut report = BatchReport::default();
        for (idx, raw) in reader.split(b'\n').enumerate() {
            let line_number = idx + 1;
            let line = String::from_utf8(raw?).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {} is not valid UTF-8: {}", line_number, e),
                )
            })?;
            let line = match line_number {
                1 => line.trim_start_matches(BYTE_ORDER_MARK),
                _ => line.as_str(),
            };
            let outcome = self.parse_isolated(line);
            Self::record(&mut report, line_number, outcome);
        }
        Self::log_summary(&report);
        Ok(report)
    }

    fn parse_isolated(&self, line: &str) -> Result<ParseOutcome, LineError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.parser.parse(line)))
            .unwrap_or_else(|payload| Err(LineError::Panicked(panic_message(payload))))
    }

    fn record(
        report: &mut BatchReport,
        line_number: usize,
        outcome: Result<ParseOutcome, LineError>,
    ) {
        match outcome {
            Ok(ParseOutcome::Entry(entry)) => report.push_entry(entry),
            Ok(ParseOutcome::Skip) => report.push_skip(),
            Err(e) => {
                warn!("Error parsing line {}: {}", line_number, e);
                report.push_warning(line_number, e.to_string());
            }
        }
    }

    fn log_summary(report: &BatchReport) {
        debug!(
            "processed {} lines: {} entries, {} skipped, {} warnings",
            report.lines_read,
            report.entries.len(),
            report.skipped,
            report.warnings.len()
        );
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => message.to_string(),
            Err(_) => "unknown panic".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::TranscriptionError;
    use crate::features::transcription::Style;
    use crate::features::transcription::stub::{EchoOracle, PoisonOracle};
    use std::io::{BufReader, Cursor, Read};

    const SAMPLE: &[&str] = &[
        "# CC-CEDICT",
        "#! version=1",
        "",
        "一 一 [yi1] /one/",
        "壞 坏 [huai4] /bad/",
        "二 二 [er4] /two/",
        "broken",
        "三 三 [san1] /three/",
    ];

    /// Panics on headwords containing `炸`.
    struct PanickyOracle;

    impl Transliterator for PanickyOracle {
        fn transcribe(&self, characters: &str, style: Style) -> Result<String, TranscriptionError> {
            if characters.contains('炸') {
                panic!("cannot read {}", characters);
            }
            EchoOracle.transcribe(characters, style)
        }
    }

    /// Hands out `data`, then fails every read after it.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::other("disk went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn keeps_valid_entries_in_source_order() {
        let report = BatchProcessor::new(EchoOracle).process_lines(SAMPLE);
        let words: Vec<_> = report.entries.iter().map(|e| e.traditional.as_str()).collect();
        assert_eq!(words, vec!["一", "壞", "二", "三"]);
        assert!(report.warnings.is_empty());
        assert_eq!(report.skipped, 4);
        assert_eq!(report.lines_read, SAMPLE.len());
    }

    #[test]
    fn isolates_a_faulty_line() {
        let processor = BatchProcessor::new(PoisonOracle { poison: '壞' });
        let report = processor.process_lines(SAMPLE);

        let words: Vec<_> = report.entries.iter().map(|e| e.traditional.as_str()).collect();
        assert_eq!(words, vec!["一", "二", "三"]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line_number, 5);
        assert!(report.warnings[0].message.contains("壞"));
    }

    #[test]
    fn every_faulty_line_gets_its_own_warning() {
        let lines = vec!["壞 坏 [a] /x/", "好 好 [b] /y/", "壞了 坏了 [c] /z/"];
        let report = BatchProcessor::new(PoisonOracle { poison: '壞' }).process_lines(lines);
        assert_eq!(report.entries.len(), 1);
        let numbers: Vec<_> = report.warnings.iter().map(|w| w.line_number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn a_panicking_oracle_only_costs_its_line() {
        let lines = vec![
            "好 好 [hao3] /good/",
            "炸 炸 [zha4] /explode/",
            "大 大 [da4] /big/",
        ];
        let report = BatchProcessor::new(PanickyOracle).process_lines(lines);

        let words: Vec<_> = report.entries.iter().map(|e| e.traditional.as_str()).collect();
        assert_eq!(words, vec!["好", "大"]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line_number, 2);
        assert!(report.warnings[0].message.contains("cannot read 炸"));
    }

    #[test]
    fn empty_input_is_an_empty_report() {
        let report = BatchProcessor::new(EchoOracle).process_lines(Vec::<String>::new());
        assert_eq!(report, BatchReport::default());
        assert!(report.is_empty());
    }

    #[test]
    fn reads_lines_from_a_reader() {
        let text = "\u{feff}一 一 [yi1] /one/\r\n# comment\r\n二 二 [er4] /two/";
        let report = BatchProcessor::new(EchoOracle)
            .process_reader(Cursor::new(text))
            .unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].traditional, "一");
        assert_eq!(report.entries[1].meaning, vec!["two"]);
        assert_eq!(report.lines_read, 3);
    }

    #[test]
    fn invalid_utf8_ends_the_pass() {
        let mut bytes = "一 一 [yi1] /one/\n".as_bytes().to_vec();
        bytes.extend_from_slice(b"\xff\xfe bad /x/\n");
        let err = BatchProcessor::new(EchoOracle)
            .process_reader(Cursor::new(bytes))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn read_errors_end_the_pass() {
        let reader = FailingReader {
            data: Cursor::new("一 一 [yi1] /one/\n".as_bytes().to_vec()),
        };
        let err = BatchProcessor::new(EchoOracle)
            .process_reader(BufReader::new(reader))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
