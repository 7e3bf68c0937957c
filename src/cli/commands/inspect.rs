//! `inspect`: metadata, curves and parse diagnostics of one file

use super::shared::{format_field, format_value, load_well, print_json};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::error::Result;
use crate::models::{ParseDiagnostic, ParseOutcome, TextEncoding, WellMetadata};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Diagnostics listed before the human report truncates
const DIAGNOSTIC_PREVIEW: usize = 10;

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    file: &'a Path,
    display_name: String,
    metadata: &'a WellMetadata,
    curves: &'a [String],
    row_count: usize,
    encoding: TextEncoding,
    skipped_lines: usize,
    diagnostics: &'a [ParseDiagnostic],
}

pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    info!("Inspecting {}", args.file.display());
    let outcome = load_well(&args.file).await?;

    let filename = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match args.output_format {
        OutputFormat::Json => print_json(&InspectReport {
            file: &args.file,
            display_name: outcome.record.metadata.display_name(&filename),
            metadata: &outcome.record.metadata,
            curves: outcome.record.curves(),
            row_count: outcome.record.row_count(),
            encoding: outcome.encoding,
            skipped_lines: outcome.skipped_lines(),
            diagnostics: &outcome.diagnostics,
        }),
        OutputFormat::Human => {
            print_report(&outcome, &filename, args.show_diagnostics);
            Ok(())
        }
    }
}

fn print_report(outcome: &ParseOutcome, filename: &str, show_all: bool) {
    let metadata = &outcome.record.metadata;

    println!(
        "{}",
        metadata.display_name(filename).bright_green().bold()
    );
    println!("  {} {}", "Company:".bright_cyan(), format_field(metadata.company.as_deref()));
    println!("  {} {}", "Field:".bright_cyan(), format_field(metadata.field.as_deref()));
    println!("  {} {}", "Location:".bright_cyan(), format_field(metadata.location.as_deref()));
    println!("  {} {}", "Country:".bright_cyan(), format_field(metadata.country.as_deref()));
    println!("  {} {}", "Date:".bright_cyan(), format_field(metadata.date_analysed.as_deref()));
    println!(
        "  {} {} to {} (step {})",
        "Depth:".bright_cyan(),
        format_value(metadata.start_depth),
        format_value(metadata.stop_depth),
        format_value(metadata.step)
    );
    println!("  {} {}", "Null value:".bright_cyan(), format_value(metadata.null_value));
    if outcome.encoding == TextEncoding::Latin1 {
        println!("  {} Latin-1", "Encoding:".bright_yellow());
    }

    println!(
        "\n{} {}",
        "Curves:".bright_cyan(),
        outcome.record.curves().len().to_string().bright_white().bold()
    );
    println!("  {}", outcome.record.curves().join(", "));
    println!(
        "{} {}",
        "Rows:".bright_cyan(),
        outcome.record.row_count().to_string().bright_white().bold()
    );

    if outcome.diagnostics.is_empty() {
        return;
    }

    println!(
        "\n{} {} ({} line(s) skipped)",
        "Diagnostics:".bright_yellow(),
        outcome.diagnostics.len(),
        outcome.skipped_lines()
    );
    let limit = if show_all {
        outcome.diagnostics.len()
    } else {
        DIAGNOSTIC_PREVIEW
    };
    for diagnostic in outcome.diagnostics.iter().take(limit) {
        println!("  {}", diagnostic);
    }
    if outcome.diagnostics.len() > limit {
        println!(
            "  ... {} more (use --diagnostics to list all)",
            outcome.diagnostics.len() - limit
        );
    }
}
