//! Command-line argument definitions for the LAS processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::{CompressionAlgorithm, ProcessorConfig};
use crate::constants::{DEFAULT_FILE_PATTERN, SENTINEL_THRESHOLD};
use crate::error::{LasError, Result};
use crate::query::CurveQuery;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the LAS well-log processor
///
/// Parses LAS well logs, reports curve statistics and gas ratios, and
/// converts batches of logs to Parquet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-processor",
    version,
    about = "Parse LAS well logs, compute curve statistics and convert to Parquet",
    long_about = "A tolerant LAS well-log processor. Reads version, well, curve and ASCII data \
                  sections, reports per-curve statistics with sentinel filtering, light \
                  hydrocarbon gas ratios and a rules-based interpretation, and converts \
                  directories of logs to Parquet files with a JSON summary."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the LAS processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show well metadata, curves and parse diagnostics for one file
    Inspect(InspectArgs),
    /// Compute curve statistics and gas ratios for one file
    Stats(StatsArgs),
    /// Emit depth-indexed curve series for charting
    Data(DataArgs),
    /// Produce a rules-based interpretation of an interval
    Interpret(InterpretArgs),
    /// Convert a directory of LAS files to Parquet plus a summary
    Convert(ConvertArgs),
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Verbosity flags shared by every command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LoggingArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Wrapper for parsing comma-separated curve lists
#[derive(Debug, Clone, PartialEq)]
pub struct CurveList {
    pub curves: Vec<String>,
}

impl FromStr for CurveList {
    type Err = LasError;

    fn from_str(s: &str) -> Result<Self> {
        let curves: Vec<String> = s
            .split(',')
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();

        if curves.is_empty() {
            return Err(LasError::invalid_query("curve list cannot be empty"));
        }

        Ok(CurveList { curves })
    }
}

/// Curve selection and depth window shared by the query commands
#[derive(Debug, Clone, clap::Args)]
pub struct QueryArgs {
    /// Curves to include (comma-separated, default: all)
    #[arg(short = 'c', long = "curves", value_name = "LIST")]
    pub curves: Option<CurveList>,

    /// Top of the depth window (inclusive, needs --to)
    #[arg(long = "from", value_name = "DEPTH", requires = "depth_to")]
    pub depth_from: Option<f64>,

    /// Bottom of the depth window (inclusive, needs --from)
    #[arg(long = "to", value_name = "DEPTH", requires = "depth_from")]
    pub depth_to: Option<f64>,

    /// Values at or below this are treated as missing readings
    #[arg(
        long = "sentinel",
        value_name = "VALUE",
        default_value_t = SENTINEL_THRESHOLD,
        allow_hyphen_values = true
    )]
    pub sentinel_threshold: f64,
}

impl QueryArgs {
    pub fn to_query(&self) -> CurveQuery {
        CurveQuery {
            curves: self.curves.as_ref().map(|list| list.curves.clone()),
            depth_from: self.depth_from,
            depth_to: self.depth_to,
            downsample: None,
        }
    }

    pub fn to_config(&self) -> ProcessorConfig {
        ProcessorConfig::default().with_sentinel_threshold(self.sentinel_threshold)
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// LAS file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// List every diagnostic instead of a count
    #[arg(long = "diagnostics")]
    pub show_diagnostics: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// LAS file to analyse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the data command
#[derive(Debug, Clone, Parser)]
pub struct DataArgs {
    /// LAS file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Keep every n-th row of the series (statistics use every row)
    #[arg(short = 'n', long = "downsample", value_name = "STRIDE", default_value_t = 1)]
    pub downsample: usize,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl DataArgs {
    pub fn to_query(&self) -> CurveQuery {
        self.query.to_query().with_downsample(self.downsample)
    }
}

/// Arguments for the interpret command
#[derive(Debug, Clone, Parser)]
pub struct InterpretArgs {
    /// LAS file to interpret
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Directory of LAS files (searched recursively) or a single file
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output directory for Parquet files and the summary
    ///
    /// Defaults to a `parquet` directory inside the input directory.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// Number of files converted concurrently
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// File name pattern to match (case-insensitive)
    #[arg(long = "pattern", value_name = "GLOB", default_value = DEFAULT_FILE_PATTERN)]
    pub file_pattern: String,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long = "compression", value_name = "ALGO", default_value = "snappy")]
    pub compression: CompressionAlgorithm,

    /// Rows per Parquet row group
    #[arg(long = "row-group-size", value_name = "ROWS")]
    pub row_group_size: Option<usize>,

    /// Values at or below this are treated as missing readings
    #[arg(
        long = "sentinel",
        value_name = "VALUE",
        default_value_t = SENTINEL_THRESHOLD,
        allow_hyphen_values = true
    )]
    pub sentinel_threshold: f64,

    /// Force overwrite of existing output files
    #[arg(long = "force")]
    pub force_overwrite: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl ConvertArgs {
    /// Build the processor configuration from the flags
    pub fn to_config(&self) -> ProcessorConfig {
        let mut config = ProcessorConfig::default()
            .with_file_pattern(self.file_pattern.clone())
            .with_compression(self.compression)
            .with_sentinel_threshold(self.sentinel_threshold);

        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(rows) = self.row_group_size {
            config = config.with_row_group_size(rows);
        }
        if self.force_overwrite {
            config = config.with_force_overwrite();
        }
        config
    }
}

impl Commands {
    /// Logging flags of whichever command was given
    pub fn logging(&self) -> &LoggingArgs {
        match self {
            Commands::Inspect(args) => &args.logging,
            Commands::Stats(args) => &args.logging,
            Commands::Data(args) => &args.logging,
            Commands::Interpret(args) => &args.logging,
            Commands::Convert(args) => &args.logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_list_parsing() {
        let result = CurveList::from_str("gr, HC1 ,,rop").unwrap();
        assert_eq!(result.curves, vec!["GR", "HC1", "ROP"]);

        assert!(CurveList::from_str("").is_err());
        assert!(CurveList::from_str(",,,").is_err());
    }

    #[test]
    fn test_log_level() {
        let mut logging = LoggingArgs::default();
        assert_eq!(logging.get_log_level(), "warn");

        logging.verbose = 1;
        assert_eq!(logging.get_log_level(), "info");
        logging.verbose = 2;
        assert_eq!(logging.get_log_level(), "debug");
        logging.verbose = 5;
        assert_eq!(logging.get_log_level(), "trace");

        logging.quiet = true;
        assert_eq!(logging.get_log_level(), "error");
        assert!(!logging.show_progress());
    }

    #[test]
    fn test_parse_stats_command() {
        let args = Args::try_parse_from([
            "las-processor",
            "stats",
            "well.las",
            "--curves",
            "HC1,HC2",
            "--from",
            "1000",
            "--to",
            "1100",
            "--sentinel",
            "-500",
        ])
        .unwrap();

        let Some(Commands::Stats(stats)) = args.command else {
            panic!("expected stats command");
        };
        let query = stats.query.to_query();
        assert_eq!(query.curves, Some(vec!["HC1".to_string(), "HC2".to_string()]));
        assert_eq!(query.depth_range(), Some((1000.0, 1100.0)));
        assert_eq!(stats.query.to_config().sentinel_threshold, -500.0);
    }

    #[test]
    fn test_depth_bounds_must_be_paired() {
        let result = Args::try_parse_from(["las-processor", "stats", "well.las", "--from", "1000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_downsample() {
        let args =
            Args::try_parse_from(["las-processor", "data", "well.las", "-n", "5"]).unwrap();
        let Some(Commands::Data(data)) = args.command else {
            panic!("expected data command");
        };
        assert_eq!(data.to_query().downsample, Some(5));
        assert_eq!(data.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_convert_config() {
        let args = Args::try_parse_from([
            "las-processor",
            "convert",
            "logs",
            "-j",
            "3",
            "--compression",
            "zstd",
            "--force",
        ])
        .unwrap();
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("expected convert command");
        };

        let config = convert.to_config();
        assert_eq!(config.workers, 3);
        assert_eq!(config.parquet.compression, CompressionAlgorithm::Zstd);
        assert!(config.force_overwrite);
        assert_eq!(config.file_pattern, "*.las");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["las-processor", "inspect", "well.las", "-q", "-v"]);
        assert!(result.is_err());
    }
}
