//! Parquet writing module for parsed wells
//!
//! Each well becomes one Parquet file: a `depth` column followed by one
//! nullable float column per curve, in declaration order. Output files
//! mirror the source layout below the input root, so wells sharing a file
//! name in different folders never collide.

use crate::config::ParquetOptions;
use crate::constants::{DEPTH_COLUMN, PARQUET_EXTENSION};
use crate::error::{LasError, Result};
use crate::models::SampleMatrix;

use polars::prelude::{Column, DataFrame, ParquetWriter as PolarsParquetWriter};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes sample matrices to Parquet files in one output directory
#[derive(Debug, Clone)]
pub struct ParquetWriter {
    input_root: PathBuf,
    output_dir: PathBuf,
    options: ParquetOptions,
    force_overwrite: bool,
}

impl ParquetWriter {
    /// Create a new Parquet writer for sources found under `input_root`
    pub fn new(
        input_root: PathBuf,
        output_dir: PathBuf,
        options: ParquetOptions,
        force_overwrite: bool,
    ) -> Self {
        Self {
            input_root,
            output_dir,
            options,
            force_overwrite,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/<source path below the input root>.parquet`
    ///
    /// Sources outside the input root fall back to their file name.
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        let relative = match source.strip_prefix(&self.input_root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
            _ => source
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("well")),
        };
        self.output_dir
            .join(relative)
            .with_extension(PARQUET_EXTENSION)
    }

    /// Write one matrix; refuses to replace an existing file unless forced
    pub fn write(&self, matrix: &SampleMatrix, source: &Path) -> Result<PathBuf> {
        let output_path = self.output_path_for(source);
        let mut df = to_dataframe(matrix)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = self.create_output(&output_path)?;

        PolarsParquetWriter::new(file)
            .with_compression(self.options.compression.to_polars_compression())
            .with_row_group_size(self.options.row_group_size)
            .finish(&mut df)
            .map_err(|e| LasError::ProcessingFailed {
                path: output_path.clone(),
                reason: format!("Failed to write parquet: {}", e),
            })?;

        debug!(
            "Wrote {} rows x {} columns to {}",
            df.height(),
            df.width(),
            output_path.display()
        );
        Ok(output_path)
    }

    /// Exclusive create unless forced
    fn create_output(&self, path: &Path) -> Result<File> {
        if self.force_overwrite {
            return Ok(File::create(path)?);
        }
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => LasError::OutputExists {
                    path: path.to_path_buf(),
                },
                _ => LasError::Io(e),
            })
    }
}

/// Columnar view of a matrix: depth first, then every curve
pub fn to_dataframe(matrix: &SampleMatrix) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(matrix.curves().len() + 1);
    columns.push(Column::new(DEPTH_COLUMN.into(), matrix.depths()));

    for (index, curve) in matrix.curves().iter().enumerate() {
        let values: Vec<Option<f64>> = matrix.rows().iter().map(|row| row.value(index)).collect();
        columns.push(Column::new(curve.as_str().into(), values));
    }

    Ok(DataFrame::new(columns)?)
}
