//! Core data structures for LAS processing.
//!
//! Defines the parsed well record (metadata, curve list, sample matrix),
//! parse diagnostics and batch processing statistics.

use crate::constants::{DEFAULT_WELL_NAME, GENERIC_WELL_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Metadata extracted from the version/well header sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellMetadata {
    pub start_depth: Option<f64>,
    pub stop_depth: Option<f64>,
    pub step: Option<f64>,
    pub null_value: Option<f64>,
    pub well_name: String,
    pub company: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub date_analysed: Option<String>,
}

impl Default for WellMetadata {
    fn default() -> Self {
        Self {
            start_depth: None,
            stop_depth: None,
            step: None,
            null_value: None,
            well_name: DEFAULT_WELL_NAME.to_string(),
            company: None,
            field: None,
            location: None,
            country: None,
            date_analysed: None,
        }
    }
}

impl WellMetadata {
    /// Name suitable for listing wells side by side
    ///
    /// Generic names such as `WELL1` or `Unknown` are qualified with the
    /// source file name.
    pub fn display_name(&self, filename: &str) -> String {
        let upper = self.well_name.to_uppercase();
        if GENERIC_WELL_NAMES.contains(&upper.as_str()) {
            format!("{} ({})", self.well_name, filename)
        } else {
            self.well_name.clone()
        }
    }
}

/// One data line: a depth and one value slot per declared curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub depth: f64,
    /// Index-aligned with [`SampleMatrix::curves`]
    pub values: Vec<Option<f64>>,
}

impl SampleRow {
    /// Value of the curve at `index`, if the line supplied one
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// Ordered curve list plus the rows that reference it by index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleMatrix {
    curves: Vec<String>,
    rows: Vec<SampleRow>,
}

impl SampleMatrix {
    /// Create a matrix, padding or truncating each row to the curve count
    pub fn new(curves: Vec<String>, mut rows: Vec<SampleRow>) -> Self {
        let width = curves.len();
        for row in &mut rows {
            row.values.resize(width, None);
        }
        Self { curves, rows }
    }

    pub fn curves(&self) -> &[String] {
        &self.curves
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a curve in the declaration order
    pub fn curve_index(&self, name: &str) -> Option<usize> {
        self.curves.iter().position(|c| c == name)
    }

    /// Depths of every row in row order
    pub fn depths(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.depth).collect()
    }

    /// Series for a single curve in row order (`None` for unknown curves)
    pub fn series(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let index = self.curve_index(name)?;
        Some(self.rows.iter().map(|row| row.value(index)).collect())
    }

    /// Rows with `from <= depth <= to`, ordered by depth
    ///
    /// The sort is stable so rows sharing a depth keep file order.
    pub fn depth_window(&self, from: f64, to: f64) -> SampleMatrix {
        let mut rows: Vec<SampleRow> = self
            .rows
            .iter()
            .filter(|row| row.depth >= from && row.depth <= to)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        SampleMatrix {
            curves: self.curves.clone(),
            rows,
        }
    }

    /// All rows ordered by depth
    pub fn sorted_by_depth(&self) -> SampleMatrix {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        SampleMatrix {
            curves: self.curves.clone(),
            rows,
        }
    }
}

/// Everything extracted from one LAS file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    pub metadata: WellMetadata,
    pub matrix: SampleMatrix,
}

impl WellRecord {
    pub fn curves(&self) -> &[String] {
        self.matrix.curves()
    }

    pub fn rows(&self) -> &[SampleRow] {
        self.matrix.rows()
    }

    pub fn row_count(&self) -> usize {
        self.matrix.row_count()
    }
}

/// Parser state, also used to locate diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Header,
    Curve,
    Data,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Curve => write!(f, "curve"),
            Section::Data => write!(f, "data"),
        }
    }
}

/// What went wrong with a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Header or curve line without a `.` separator
    MissingSeparator { section: Section },
    /// Curve line whose mnemonic is empty
    EmptyCurveMnemonic,
    /// Numeric header field whose value has no number
    MissingNumber { mnemonic: String },
    /// Data line without a single numeric token
    NoNumericTokens,
    /// Data line with tokens that are not numbers
    DroppedTokens { count: usize },
    /// Data line with fewer values than declared curves
    ShortRow { expected: usize, found: usize },
    /// Data line with more values than declared curves
    LongRow { expected: usize, found: usize },
    /// Marker other than `~V`/`~W`/`~C`/`~A` met inside the data section
    UnknownSectionInData { marker: String },
}

impl DiagnosticKind {
    /// Whether the whole line was discarded
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::MissingSeparator { .. }
                | DiagnosticKind::EmptyCurveMnemonic
                | DiagnosticKind::NoNumericTokens
                | DiagnosticKind::UnknownSectionInData { .. }
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingSeparator { section } => {
                write!(f, "{} line has no '.' separator", section)
            }
            DiagnosticKind::EmptyCurveMnemonic => write!(f, "curve line has an empty mnemonic"),
            DiagnosticKind::MissingNumber { mnemonic } => {
                write!(f, "no numeric value for {}", mnemonic)
            }
            DiagnosticKind::NoNumericTokens => write!(f, "data line has no numeric tokens"),
            DiagnosticKind::DroppedTokens { count } => {
                write!(f, "dropped {} non-numeric token(s)", count)
            }
            DiagnosticKind::ShortRow { expected, found } => {
                write!(f, "row has {} value(s) for {} curve(s)", found, expected)
            }
            DiagnosticKind::UnknownSectionInData { marker } => {
                write!(f, "section marker {} ignored inside data", marker)
            }
            DiagnosticKind::LongRow { expected, found } => {
                write!(
                    f,
                    "row has {} value(s) for {} curve(s), extras ignored",
                    found, expected
                )
            }
        }
    }
}

/// A line the parser skipped or only partly understood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    /// 1-based line number in the decoded text
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Text decoding that produced the line sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Utf8,
    /// Fallback for input that is not valid UTF-8
    Latin1,
}

/// Best-effort record plus the diagnostics collected while producing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub record: WellRecord,
    pub diagnostics: Vec<ParseDiagnostic>,
    pub encoding: TextEncoding,
}

impl ParseOutcome {
    /// Number of lines discarded entirely
    pub fn skipped_lines(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.kind.is_skip()).count()
    }

    pub fn into_record(self) -> WellRecord {
        self.record
    }
}

/// Per-curve values kept in selection order, serialized as a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> CurveMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert unless the curve is already present; returns whether it was added
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(curve, _)| curve == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply `f` to every value, keeping names and order
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> CurveMap<U> {
        CurveMap {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), f(value)))
                .collect(),
        }
    }
}

impl<T> Default for CurveMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for CurveMap<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name, value)))
    }
}

/// Batch processing statistics
#[derive(Debug, Default, Serialize)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub total_diagnostics: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: f64, values: &[Option<f64>]) -> SampleRow {
        SampleRow {
            depth,
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_display_name_generic() {
        let metadata = WellMetadata {
            well_name: "WELL1".to_string(),
            ..Default::default()
        };
        assert_eq!(metadata.display_name("a.las"), "WELL1 (a.las)");

        let metadata = WellMetadata::default();
        assert_eq!(metadata.display_name("b.las"), "Unknown (b.las)");

        let metadata = WellMetadata {
            well_name: "n/a".to_string(),
            ..Default::default()
        };
        assert_eq!(metadata.display_name("c.las"), "n/a (c.las)");
    }

    #[test]
    fn test_display_name_specific() {
        let metadata = WellMetadata {
            well_name: "EAGLE-7".to_string(),
            ..Default::default()
        };
        assert_eq!(metadata.display_name("eagle.las"), "EAGLE-7");
    }

    #[test]
    fn test_matrix_pads_short_rows() {
        let matrix = SampleMatrix::new(
            vec!["DEPT".to_string(), "GR".to_string(), "RT".to_string()],
            vec![row(100.0, &[Some(100.0)])],
        );
        assert_eq!(matrix.rows()[0].values, vec![Some(100.0), None, None]);
    }

    #[test]
    fn test_depth_window_inclusive_and_sorted() {
        let matrix = SampleMatrix::new(
            vec!["GR".to_string()],
            vec![
                row(103.0, &[Some(3.0)]),
                row(100.0, &[Some(0.0)]),
                row(102.0, &[Some(2.0)]),
                row(101.0, &[Some(1.0)]),
                row(104.0, &[Some(4.0)]),
            ],
        );

        let window = matrix.depth_window(101.0, 103.0);
        assert_eq!(window.depths(), vec![101.0, 102.0, 103.0]);
        assert_eq!(
            window.series("GR").unwrap(),
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
    }

    #[test]
    fn test_series_unknown_curve() {
        let matrix = SampleMatrix::new(vec!["GR".to_string()], vec![row(1.0, &[Some(1.0)])]);
        assert!(matrix.series("RT").is_none());
        assert_eq!(matrix.curve_index("GR"), Some(0));
    }

    #[test]
    fn test_skip_classification() {
        assert!(DiagnosticKind::NoNumericTokens.is_skip());
        assert!(
            DiagnosticKind::MissingSeparator {
                section: Section::Curve
            }
            .is_skip()
        );
        assert!(!DiagnosticKind::DroppedTokens { count: 1 }.is_skip());
        assert!(
            !DiagnosticKind::ShortRow {
                expected: 3,
                found: 2
            }
            .is_skip()
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = ParseDiagnostic {
            line: 12,
            kind: DiagnosticKind::DroppedTokens { count: 2 },
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 12: dropped 2 non-numeric token(s)"
        );
    }

    #[test]
    fn test_curve_map_keeps_insertion_order() {
        let mut map = CurveMap::new();
        assert!(map.insert("TOTAL_GAS", 3));
        assert!(map.insert("HC1", 1));
        assert!(!map.insert("HC1", 9));

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["TOTAL_GAS", "HC1"]);
        assert_eq!(map.get("HC1"), Some(&1));
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"TOTAL_GAS":3,"HC1":1}"#);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled.get("TOTAL_GAS"), Some(&6));
        assert_eq!(doubled.len(), 2);
    }
}
