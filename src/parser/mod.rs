//! Tolerant LAS well-log parser
//!
//! Turns raw file bytes into a [`WellRecord`] in a single pass over the
//! decoded lines. The parser never fails: lines it cannot interpret are
//! skipped and reported as [`ParseDiagnostic`]s next to the best-effort
//! record.
//!
//! ## Architecture
//!
//! - [`numeric`] - first numeric token of a header value
//! - [`registry`] - unique, order-preserving curve names
//! - this module - decoding and the section state machine
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::parser::LasParser;
//!
//! let content = b"~C\nDEPT.F : depth\nGR.GAPI : gamma\n~A\n100.0 45.2\n";
//! let outcome = LasParser::new().parse(content);
//!
//! assert_eq!(outcome.record.curves(), &["DEPT", "GR"]);
//! assert_eq!(outcome.record.row_count(), 1);
//! ```

pub mod numeric;
pub mod registry;

#[cfg(test)]
pub mod tests;

pub use numeric::NumericExtractor;
pub use registry::CurveRegistry;

use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::constants::{
    COMMENT_PREFIX, CURVE_HEADER_ARTIFACTS, DEFAULT_WELL_NAME, SECTION_ASCII, SECTION_CURVE,
    SECTION_PREFIX, SECTION_VERSION, SECTION_WELL, mnemonics,
};
use crate::error::{LasError, Result};
use crate::models::{
    DiagnosticKind, ParseDiagnostic, ParseOutcome, SampleMatrix, SampleRow, Section,
    TextEncoding, WellMetadata, WellRecord,
};

/// LAS parser
///
/// Holds no per-parse state, so one instance can be shared across threads
/// and reused for any number of files.
#[derive(Debug, Clone, Default)]
pub struct LasParser {
    extractor: NumericExtractor,
}

impl LasParser {
    pub fn new() -> Self {
        Self {
            extractor: NumericExtractor::new(),
        }
    }

    /// Parse raw LAS bytes into a best-effort record
    pub fn parse(&self, bytes: &[u8]) -> ParseOutcome {
        let (text, encoding) = decode(bytes);
        if encoding == TextEncoding::Latin1 {
            warn!("Input is not valid UTF-8, decoded as Latin-1");
        }

        let mut state = ParseState::new(&self.extractor);
        for (index, line) in text.lines().enumerate() {
            state.handle_line(index + 1, line);
        }

        let outcome = state.finish(encoding);
        debug!(
            "Parsed well '{}': {} curves, {} rows, {} diagnostics",
            outcome.record.metadata.well_name,
            outcome.record.curves().len(),
            outcome.record.row_count(),
            outcome.diagnostics.len()
        );
        outcome
    }

    /// Read and parse a LAS file
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LasError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => LasError::Io(e),
        })?;

        let outcome = self.parse(&bytes);
        info!(
            "Parsed {}: {} curves, {} rows",
            path.display(),
            outcome.record.curves().len(),
            outcome.record.row_count()
        );
        if outcome.skipped_lines() > 0 {
            warn!(
                "Skipped {} unreadable line(s) in {}",
                outcome.skipped_lines(),
                path.display()
            );
        }

        Ok(outcome)
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1 which accepts any input
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, TextEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let text = text.strip_prefix('\u{feff}').unwrap_or(text);
            (Cow::Borrowed(text), TextEncoding::Utf8)
        }
        Err(_) => {
            let text: String = bytes.iter().map(|&b| char::from(b)).collect();
            (Cow::Owned(text), TextEncoding::Latin1)
        }
    }
}

/// Section a `~` marker line switches to
///
/// `~V` and `~W` hold key/value header lines, `~C` and `~A` open the curve
/// and data sections. Any other marker (`~P`, `~O`, ...) is read as header
/// too, except inside the data section, where it is ignored and `None` is
/// returned so later data lines are not lost.
fn section_marker(line: &str, current: Section) -> Option<Section> {
    let upper = line.to_ascii_uppercase();
    if upper.starts_with(SECTION_VERSION) || upper.starts_with(SECTION_WELL) {
        Some(Section::Header)
    } else if upper.starts_with(SECTION_CURVE) {
        Some(Section::Curve)
    } else if upper.starts_with(SECTION_ASCII) {
        Some(Section::Data)
    } else if current == Section::Data {
        None
    } else {
        Some(Section::Header)
    }
}

/// Header fields accumulated while scanning
#[derive(Debug, Default)]
struct MetadataBuilder {
    start_depth: Option<f64>,
    stop_depth: Option<f64>,
    step: Option<f64>,
    null_value: Option<f64>,
    well_name: Option<String>,
    company: Option<String>,
    field: Option<String>,
    location: Option<String>,
    country: Option<String>,
    date_analysed: Option<String>,
}

impl MetadataBuilder {
    fn build(self) -> WellMetadata {
        WellMetadata {
            start_depth: self.start_depth,
            stop_depth: self.stop_depth,
            step: self.step,
            null_value: self.null_value,
            well_name: self
                .well_name
                .unwrap_or_else(|| DEFAULT_WELL_NAME.to_string()),
            company: self.company,
            field: self.field,
            location: self.location,
            country: self.country,
            date_analysed: self.date_analysed,
        }
    }
}

/// Mutable state of a single parse
struct ParseState<'a> {
    extractor: &'a NumericExtractor,
    section: Section,
    metadata: MetadataBuilder,
    registry: CurveRegistry,
    /// Line number and numeric tokens of every accepted data line
    raw_rows: Vec<(usize, Vec<f64>)>,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> ParseState<'a> {
    fn new(extractor: &'a NumericExtractor) -> Self {
        Self {
            extractor,
            section: Section::Header,
            metadata: MetadataBuilder::default(),
            registry: CurveRegistry::new(),
            raw_rows: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn diagnose(&mut self, line: usize, kind: DiagnosticKind) {
        debug!("Line {}: {}", line, kind);
        self.diagnostics.push(ParseDiagnostic { line, kind });
    }

    fn handle_line(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return;
        }

        if line.starts_with(SECTION_PREFIX) {
            match section_marker(line, self.section) {
                Some(section) => self.section = section,
                None => self.diagnose(
                    line_number,
                    DiagnosticKind::UnknownSectionInData {
                        marker: line.split_whitespace().next().unwrap_or(line).to_string(),
                    },
                ),
            }
            return;
        }

        match self.section {
            Section::Header => self.parse_header_line(line_number, line),
            Section::Curve => self.parse_curve_line(line_number, line),
            Section::Data => self.parse_data_line(line_number, line),
        }
    }

    /// `MNEM.UNIT  VALUE : DESCRIPTION`
    fn parse_header_line(&mut self, line_number: usize, line: &str) {
        let Some((mnemonic, rest)) = line.split_once('.') else {
            self.diagnose(
                line_number,
                DiagnosticKind::MissingSeparator {
                    section: Section::Header,
                },
            );
            return;
        };

        let mnemonic = mnemonic.trim();
        let value_text = rest.split_once(':').map_or(rest, |(value, _)| value).trim();

        match mnemonic {
            mnemonics::START_DEPTH => {
                self.metadata.start_depth = self.numeric_field(line_number, mnemonic, value_text)
            }
            mnemonics::STOP_DEPTH => {
                self.metadata.stop_depth = self.numeric_field(line_number, mnemonic, value_text)
            }
            mnemonics::STEP => {
                self.metadata.step = self.numeric_field(line_number, mnemonic, value_text)
            }
            mnemonics::NULL_VALUE => {
                self.metadata.null_value = self.numeric_field(line_number, mnemonic, value_text)
            }
            mnemonics::WELL_NAME => self.metadata.well_name = Some(value_text.to_string()),
            mnemonics::COMPANY => self.metadata.company = Some(value_text.to_string()),
            mnemonics::FIELD => self.metadata.field = Some(value_text.to_string()),
            mnemonics::LOCATION => self.metadata.location = Some(value_text.to_string()),
            mnemonics::COUNTRY => self.metadata.country = Some(value_text.to_string()),
            mnemonics::DATE => self.metadata.date_analysed = Some(value_text.to_string()),
            _ => {} // Ignore other mnemonics
        }
    }

    fn numeric_field(&mut self, line_number: usize, mnemonic: &str, value_text: &str) -> Option<f64> {
        let value = self.extractor.extract(value_text);
        if value.is_none() {
            self.diagnose(
                line_number,
                DiagnosticKind::MissingNumber {
                    mnemonic: mnemonic.to_string(),
                },
            );
        }
        value
    }

    /// `MNEM.UNIT  API CODE : DESCRIPTION`
    fn parse_curve_line(&mut self, line_number: usize, line: &str) {
        let Some((mnemonic, _)) = line.split_once('.') else {
            self.diagnose(
                line_number,
                DiagnosticKind::MissingSeparator {
                    section: Section::Curve,
                },
            );
            return;
        };

        let mnemonic = mnemonic.trim().to_uppercase();
        if mnemonic.is_empty() {
            self.diagnose(line_number, DiagnosticKind::EmptyCurveMnemonic);
            return;
        }
        if CURVE_HEADER_ARTIFACTS.contains(&mnemonic.as_str()) {
            return;
        }

        let duplicate = self.registry.contains(&mnemonic);
        let name = self.registry.register(&mnemonic);
        if duplicate {
            debug!("Duplicate curve {} registered as {}", mnemonic, name);
        }
    }

    /// Whitespace separated numbers, depth first
    fn parse_data_line(&mut self, line_number: usize, line: &str) {
        let mut dropped = 0;
        let tokens: Vec<f64> = line
            .split_whitespace()
            .filter_map(|token| match token.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    dropped += 1;
                    None
                }
            })
            .collect();

        if tokens.is_empty() {
            self.diagnose(line_number, DiagnosticKind::NoNumericTokens);
            return;
        }
        if dropped > 0 {
            self.diagnose(line_number, DiagnosticKind::DroppedTokens { count: dropped });
        }

        self.raw_rows.push((line_number, tokens));
    }

    /// Align every row with the final curve list
    ///
    /// Slot `j` of a row holds token `j` of its line, so the first declared
    /// curve (the depth curve in well-formed files) repeats the depth.
    fn finish(mut self, encoding: TextEncoding) -> ParseOutcome {
        let width = self.registry.len();
        let raw_rows = std::mem::take(&mut self.raw_rows);
        let mut rows = Vec::with_capacity(raw_rows.len());

        for (line_number, tokens) in raw_rows {
            let found = tokens.len();
            if found < width {
                self.diagnose(
                    line_number,
                    DiagnosticKind::ShortRow {
                        expected: width,
                        found,
                    },
                );
            } else if found > width {
                self.diagnose(
                    line_number,
                    DiagnosticKind::LongRow {
                        expected: width,
                        found,
                    },
                );
            }

            let values = (0..width).map(|j| tokens.get(j).copied()).collect();
            rows.push(SampleRow {
                depth: tokens[0],
                values,
            });
        }

        self.diagnostics.sort_by_key(|d| d.line);

        ParseOutcome {
            record: WellRecord {
                metadata: self.metadata.build(),
                matrix: SampleMatrix::new(self.registry.into_names(), rows),
            },
            diagnostics: self.diagnostics,
            encoding,
        }
    }
}
