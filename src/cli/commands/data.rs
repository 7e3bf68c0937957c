//! `data`: decimated curve series for charting

use super::shared::{format_value, load_well, print_json};
use crate::cli::args::{DataArgs, OutputFormat};
use crate::error::Result;
use crate::query::{ChartPayload, QueryEngine};
use colored::*;
use tracing::info;

pub async fn run_data(args: DataArgs) -> Result<()> {
    let query = args.to_query();
    query.validate()?;

    let outcome = load_well(&args.file).await?;
    let engine = QueryEngine::new(args.query.to_config());
    let payload = engine.chart(&outcome.record.matrix, &query)?;
    info!(
        "Chart payload: {} depths, {} curves",
        payload.depths.len(),
        payload.curves.len()
    );

    match args.output_format {
        OutputFormat::Json => print_json(&payload),
        OutputFormat::Human => {
            print_table(&payload);
            Ok(())
        }
    }
}

/// Tab-separated table, one line per depth
fn print_table(payload: &ChartPayload) {
    let mut header = vec!["DEPTH".to_string()];
    header.extend(payload.curves.names().map(str::to_string));
    println!("{}", header.join("\t").bright_cyan());

    for (row, depth) in payload.depths.iter().enumerate() {
        let mut line = vec![depth.to_string()];
        for (_, series) in payload.curves.iter() {
            line.push(format_value(series.get(row).copied().flatten()));
        }
        println!("{}", line.join("\t"));
    }
}
