//! Batch conversion of LAS files.
//!
//! Orchestrates discovery, concurrent parsing, Parquet writing and the
//! JSON batch summary. Parsing is CPU-bound and runs on the blocking pool;
//! a semaphore bounds how many files are in flight.

pub mod discovery;
pub mod summary;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::discovery::FileDiscovery;
use self::summary::{BatchSummary, FailedFile, WellSummary, deduplicate_display_names};
use self::writer::ParquetWriter;

use crate::config::ProcessorConfig;
use crate::constants::SUMMARY_FILE_NAME;
use crate::error::{LasError, Result};
use crate::models::ProcessingStats;
use crate::parser::LasParser;
use crate::stats::{GasRatioSet, StatisticsEngine, chart_statistics};

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Per-file work shared by every blocking task
#[derive(Debug)]
struct FileConverter {
    parser: LasParser,
    statistics: StatisticsEngine,
    writer: ParquetWriter,
    chart_precision: u32,
}

impl FileConverter {
    fn convert(&self, path: &Path) -> Result<WellSummary> {
        let outcome = self.parser.parse_file(path)?;
        let output_file = self.writer.write(&outcome.record.matrix, path)?;

        let stats = self.statistics.compute_all(&outcome.record.matrix);
        let gas_ratios = GasRatioSet::from_statistics(&stats).map(|r| r.report());

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(WellSummary {
            source_file: path.to_path_buf(),
            output_file,
            display_name: outcome.record.metadata.display_name(&filename),
            curves: outcome.record.curves().to_vec(),
            row_count: outcome.record.row_count(),
            diagnostics: outcome.diagnostics.len(),
            skipped_lines: outcome.skipped_lines(),
            encoding: outcome.encoding,
            stats: chart_statistics(&stats, self.chart_precision),
            gas_ratios,
            metadata: outcome.record.metadata,
        })
    }
}

/// Converts a directory of LAS files to Parquet plus a summary
#[derive(Debug)]
pub struct BatchConverter {
    input_path: PathBuf,
    output_dir: PathBuf,
    config: ProcessorConfig,
    cancel: CancellationToken,
    show_progress: bool,
}

impl BatchConverter {
    /// Create a converter; outputs default to `<input>/parquet`
    pub fn new(input_path: PathBuf, output_dir: Option<PathBuf>) -> Result<Self> {
        if !input_path.exists() {
            return Err(LasError::FileNotFound { path: input_path });
        }

        let output_dir = output_dir.unwrap_or_else(|| {
            let base = if input_path.is_file() {
                input_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf()
            } else {
                input_path.clone()
            };
            base.join("parquet")
        });

        Ok(Self {
            input_path,
            output_dir,
            config: ProcessorConfig::default(),
            cancel: CancellationToken::new(),
            show_progress: false,
        })
    }

    /// Configure the converter
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Stop scheduling files once this token is cancelled
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Print colored progress to stdout
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }

    /// Directory whose layout the outputs mirror
    fn input_root(&self) -> PathBuf {
        if self.input_path.is_file() {
            self.input_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf()
        } else {
            self.input_path.clone()
        }
    }

    /// Main conversion entry point
    pub async fn convert(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        if self.show_progress {
            println!("{}", "Starting LAS conversion".bright_green().bold());
            println!("  {} {}", "Input:".bright_cyan(), self.input_path.display());
            println!("  {} {}", "Output:".bright_cyan(), self.output_dir.display());
        }

        let discovery = FileDiscovery::new(self.input_path.clone(), &self.config.file_pattern)?;
        let files = discovery.discover_las_files().await?;
        if files.is_empty() {
            return Err(LasError::NoLasFiles {
                path: self.input_path.clone(),
            });
        }
        if self.show_progress {
            println!(
                "  {} {} LAS files",
                "Found".bright_green(),
                files.len().to_string().bright_white().bold()
            );
        }

        let summary_path = self.summary_path();
        if summary_path.exists() && !self.config.force_overwrite {
            return Err(LasError::OutputExists { path: summary_path });
        }
        fs::create_dir_all(&self.output_dir).await?;

        let writer = ParquetWriter::new(
            self.input_root(),
            self.output_dir.clone(),
            self.config.parquet.clone(),
            self.config.force_overwrite,
        );
        let (files, collisions) = claim_output_paths(files, &writer);

        let converter = Arc::new(FileConverter {
            parser: LasParser::new(),
            statistics: StatisticsEngine::from_config(&self.config),
            writer,
            chart_precision: self.config.chart_precision,
        });

        let results = self.convert_files(&files, converter).await;

        if self.cancel.is_cancelled() {
            return Err(LasError::Interrupted {
                reason: "conversion cancelled before all files were processed".to_string(),
            });
        }

        let mut wells = Vec::new();
        let mut failures = collisions;
        for (path, result) in results {
            match result {
                Ok(well) => wells.push(well),
                Err(e) => failures.push(FailedFile {
                    path,
                    reason: e.to_string(),
                }),
            }
        }
        wells.sort_by(|a, b| a.source_file.cmp(&b.source_file));
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        deduplicate_display_names(&mut wells);

        let stats = ProcessingStats {
            files_processed: wells.len(),
            files_failed: failures.len(),
            total_rows: wells.iter().map(|w| w.row_count).sum(),
            total_diagnostics: wells.iter().map(|w| w.diagnostics).sum(),
            output_path: self.output_dir.clone(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        BatchSummary::new(self.input_path.clone(), wells, failures)
            .write(&summary_path, self.config.force_overwrite)?;
        info!(
            "Converted {} file(s), {} failed, summary at {}",
            stats.files_processed,
            stats.files_failed,
            summary_path.display()
        );

        if self.show_progress {
            self.print_summary(&stats);
        }

        Ok(stats)
    }

    async fn convert_files(
        &self,
        files: &[PathBuf],
        converter: Arc<FileConverter>,
    ) -> Vec<(PathBuf, Result<WellSummary>)> {
        let pb = if self.show_progress {
            ProgressBar::new(files.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }

        let workers = self.config.workers.max(1);
        let semaphore = Arc::new(Semaphore::new(workers));
        debug!("Converting {} files with {} workers", files.len(), workers);

        let results = stream::iter(files.iter().cloned())
            .map(|path| {
                let semaphore = semaphore.clone();
                let converter = converter.clone();
                let cancel = self.cancel.clone();
                let pb = pb.clone();
                async move {
                    let result = tokio::select! {
                        _ = cancel.cancelled() => Err(LasError::Interrupted {
                            reason: "cancelled".to_string(),
                        }),
                        result = convert_one(semaphore, converter, path.clone()) => result,
                    };

                    if let Some(name) = path.file_name() {
                        pb.set_message(name.to_string_lossy().to_string());
                    }
                    pb.inc(1);

                    if let Err(e) = &result {
                        error!("Failed to convert {}: {}", path.display(), e);
                    }
                    (path, result)
                }
            })
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        pb.finish_with_message("All LAS files processed");
        results
    }

    fn print_summary(&self, stats: &ProcessingStats) {
        println!("\n{}", "Conversion Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Files converted:".bright_cyan(),
            stats.files_processed.to_string().bright_white()
        );
        if stats.files_failed > 0 {
            println!(
                "  {} {}",
                "Files failed:".bright_red(),
                stats.files_failed.to_string().bright_red().bold()
            );
        }
        println!(
            "  {} {}",
            "Total rows:".bright_cyan(),
            stats.total_rows.to_string().bright_white().bold()
        );
        if stats.total_diagnostics > 0 {
            println!(
                "  {} {}",
                "Diagnostics:".bright_yellow(),
                stats.total_diagnostics.to_string().bright_yellow()
            );
        }
    }
}

/// Keep the first file claiming each output path; later claimants fail
///
/// Only names differing in extension case (`well.las`, `well.LAS`) can
/// collide once outputs mirror the input layout.
fn claim_output_paths(
    files: Vec<PathBuf>,
    writer: &ParquetWriter,
) -> (Vec<PathBuf>, Vec<FailedFile>) {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut accepted = Vec::with_capacity(files.len());
    let mut collisions = Vec::new();

    for path in files {
        let output = writer.output_path_for(&path);
        match claimed.get(&output) {
            Some(first) => {
                warn!(
                    "{} and {} both map to {}",
                    first.display(),
                    path.display(),
                    output.display()
                );
                collisions.push(FailedFile {
                    reason: format!(
                        "output {} is already used by {}",
                        output.display(),
                        first.display()
                    ),
                    path,
                });
            }
            None => {
                claimed.insert(output, path.clone());
                accepted.push(path);
            }
        }
    }

    (accepted, collisions)
}

async fn convert_one(
    semaphore: Arc<Semaphore>,
    converter: Arc<FileConverter>,
    path: PathBuf,
) -> Result<WellSummary> {
    let _permit = semaphore
        .acquire_owned()
        .await
        .map_err(|e| LasError::ProcessingFailed {
            path: path.clone(),
            reason: format!("Failed to acquire worker permit: {}", e),
        })?;

    let task_path = path.clone();
    task::spawn_blocking(move || converter.convert(&task_path))
        .await
        .map_err(|e| LasError::ProcessingFailed {
            path,
            reason: format!("Conversion task failed: {}", e),
        })?
}
