//! LAS Processor Library
//!
//! A Rust library for reading LAS well-log files and summarising the curves
//! they contain.
//!
//! This library provides tools for:
//! - Tolerant parsing of LAS text into metadata, a unique curve list and a
//!   depth-indexed sample matrix, with per-line diagnostics
//! - Per-curve statistics with sentinel filtering and gas ratio analysis
//! - Depth-window queries with fixed-stride decimation for charts
//! - Batch conversion of LAS directories to Parquet with a JSON summary
//!
//! ## Example
//!
//! ```rust
//! use las_processor::{LasParser, StatisticsEngine};
//!
//! let content = b"~C\nDEPT.F\nGR.GAPI\n~A\n100.0 50.2\n101.0 -999.25\n";
//! let record = LasParser::new().parse(content).into_record();
//! let stats = StatisticsEngine::default().compute(&record.matrix, &["GR"]);
//!
//! assert_eq!(stats.get("GR").unwrap().mean, 50.2);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod narrative;
pub mod parser;
pub mod processor;
pub mod query;
pub mod stats;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{CompressionAlgorithm, ProcessorConfig};
pub use error::{LasError, Result};
pub use models::{ParseOutcome, SampleMatrix, SampleRow, WellMetadata, WellRecord};
pub use parser::LasParser;
pub use query::{CurveQuery, QueryEngine};
pub use stats::{CurveStatistic, GasRatioSet, StatisticsEngine, decimate};
