//! Error handling for LAS processing operations.
//!
//! The parsing and statistics core is total and never produces these errors.
//! They cover the outer layers: file access, request validation,
//! configuration and Parquet output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("No LAS files found under: {path}")]
    NoLasFiles { path: PathBuf },

    #[error("Invalid curve query: {reason}")]
    InvalidQuery { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing failed for file: {path} - {reason}")]
    ProcessingFailed { path: PathBuf, reason: String },

    #[error("Output already exists: {path} (use --force to overwrite)")]
    OutputExists { path: PathBuf },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl LasError {
    /// Create an invalid query error
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LasError>;
