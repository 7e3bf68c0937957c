//! Batch summary written next to the Parquet outputs

use crate::error::{LasError, Result};
use crate::models::{TextEncoding, WellMetadata};
use crate::stats::{CurveStatistics, GasRatioReport};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything known about one converted well
#[derive(Debug, Clone, Serialize)]
pub struct WellSummary {
    pub source_file: PathBuf,
    pub output_file: PathBuf,
    pub display_name: String,
    pub metadata: WellMetadata,
    pub curves: Vec<String>,
    pub row_count: usize,
    pub diagnostics: usize,
    pub skipped_lines: usize,
    pub encoding: TextEncoding,
    pub stats: CurveStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_ratios: Option<GasRatioReport>,
}

/// A file that could not be converted
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub generated_at: DateTime<Utc>,
    pub input_path: PathBuf,
    pub files_processed: usize,
    pub files_failed: usize,
    pub wells: Vec<WellSummary>,
    pub failures: Vec<FailedFile>,
}

impl BatchSummary {
    pub fn new(input_path: PathBuf, wells: Vec<WellSummary>, failures: Vec<FailedFile>) -> Self {
        Self {
            generated_at: Utc::now(),
            input_path,
            files_processed: wells.len(),
            files_failed: failures.len(),
            wells,
            failures,
        }
    }

    /// Write as pretty JSON, refusing to replace an existing file unless forced
    pub fn write(&self, path: &Path, force_overwrite: bool) -> Result<()> {
        if path.exists() && !force_overwrite {
            return Err(LasError::OutputExists {
                path: path.to_path_buf(),
            });
        }
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

/// Make display names unique within a batch
///
/// Later repeats of a name get the first free `" (Copy n)"` suffix.
pub fn deduplicate_display_names(wells: &mut [WellSummary]) {
    let mut taken: HashSet<String> = HashSet::new();

    for well in wells.iter_mut() {
        if taken.contains(&well.display_name) {
            let base = well.display_name.clone();
            let mut copy = 1;
            while taken.contains(&format!("{} (Copy {})", base, copy)) {
                copy += 1;
            }
            well.display_name = format!("{} (Copy {})", base, copy);
        }
        taken.insert(well.display_name.clone());
    }
}
