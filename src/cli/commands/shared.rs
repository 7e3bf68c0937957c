//! Helpers shared by the CLI commands

use crate::cli::args::LoggingArgs;
use crate::error::{LasError, Result};
use crate::models::ParseOutcome;
use crate::parser::LasParser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::debug;

/// Install the tracing subscriber for the whole process
pub fn setup_logging(args: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| LasError::configuration(format!("failed to set up logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| LasError::configuration(format!("failed to set up logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Parse one file on the blocking pool
pub async fn load_well(path: &Path) -> Result<ParseOutcome> {
    let path: PathBuf = path.to_path_buf();
    let task_path = path.clone();
    task::spawn_blocking(move || LasParser::new().parse_file(&task_path))
        .await
        .map_err(|e| LasError::ProcessingFailed {
            path,
            reason: format!("Parse task failed: {}", e),
        })?
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render an optional float for tables
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "-".to_string(),
    }
}

/// Render an optional header field
pub fn format_field(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}
