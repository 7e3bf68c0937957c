//! Configuration management and validation.
//!
//! Provides the processing parameters shared by the statistics engine,
//! the query layer and the batch converter, plus Parquet output settings.

use crate::constants::{
    CHART_PRECISION, DEFAULT_DOWNSAMPLE, DEFAULT_FILE_PATTERN, NARRATIVE_PRECISION,
    SENTINEL_THRESHOLD,
};
use crate::error::{LasError, Result};
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = LasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(LasError::configuration(format!(
                "unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Parquet output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParquetOptions {
    /// Compression algorithm selection
    pub compression: CompressionAlgorithm,

    /// Rows per row group (`None` lets polars decide)
    pub row_group_size: Option<usize>,
}

impl Default for ParquetOptions {
    fn default() -> Self {
        Self {
            compression: CompressionAlgorithm::Snappy,
            row_group_size: None,
        }
    }
}

/// Global configuration for LAS processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Values at or below this are treated as missing readings
    pub sentinel_threshold: f64,

    /// Decimal places for chart statistics
    pub chart_precision: u32,

    /// Decimal places for narrative statistics
    pub narrative_precision: u32,

    /// Stride used when a query gives none
    pub default_downsample: usize,

    /// Number of files converted concurrently
    pub workers: usize,

    /// Overwrite existing output files
    pub force_overwrite: bool,

    /// File name pattern for discovery
    pub file_pattern: String,

    /// Parquet output settings
    pub parquet: ParquetOptions,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            sentinel_threshold: SENTINEL_THRESHOLD,
            chart_precision: CHART_PRECISION,
            narrative_precision: NARRATIVE_PRECISION,
            default_downsample: DEFAULT_DOWNSAMPLE,
            workers: num_cpus::get(),
            force_overwrite: false,
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            parquet: ParquetOptions::default(),
        }
    }
}

impl ProcessorConfig {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the sentinel threshold
    pub fn with_sentinel_threshold(mut self, threshold: f64) -> Self {
        self.sentinel_threshold = threshold;
        self
    }

    /// Set the default decimation stride
    pub fn with_default_downsample(mut self, stride: usize) -> Self {
        self.default_downsample = stride;
        self
    }

    /// Enable overwriting existing outputs
    pub fn with_force_overwrite(mut self) -> Self {
        self.force_overwrite = true;
        self
    }

    /// Set the discovery file pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Set the parquet compression algorithm
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.parquet.compression = compression;
        self
    }

    /// Set the parquet row group size
    pub fn with_row_group_size(mut self, rows: usize) -> Self {
        self.parquet.row_group_size = Some(rows);
        self
    }

    /// Check the configuration before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.sentinel_threshold.is_finite() {
            return Err(LasError::configuration(format!(
                "sentinel threshold must be finite, got {}",
                self.sentinel_threshold
            )));
        }
        if self.workers == 0 {
            return Err(LasError::configuration("workers must be at least 1"));
        }
        if self.default_downsample == 0 {
            return Err(LasError::configuration(
                "default downsample must be at least 1",
            ));
        }
        if self.parquet.row_group_size == Some(0) {
            return Err(LasError::configuration("row group size must be positive"));
        }
        if let Err(e) = glob::Pattern::new(&self.file_pattern) {
            return Err(LasError::configuration(format!(
                "invalid file pattern '{}': {}",
                self.file_pattern, e
            )));
        }

        debug!(
            "Configuration valid: {} workers, threshold {}, compression {:?}",
            self.workers, self.sentinel_threshold, self.parquet.compression
        );
        Ok(())
    }
}
