//! `interpret`: rules-based reading of an interval

use super::shared::{load_well, print_json};
use crate::cli::args::{InterpretArgs, OutputFormat};
use crate::error::Result;
use crate::query::{NarrativePayload, QueryEngine};
use colored::*;

pub async fn run_interpret(args: InterpretArgs) -> Result<()> {
    let query = args.query.to_query();
    query.validate()?;

    let outcome = load_well(&args.file).await?;
    let engine = QueryEngine::new(args.query.to_config());
    let payload = engine.narrative(&outcome.record.matrix, &query)?;

    match args.output_format {
        OutputFormat::Json => print_json(&payload),
        OutputFormat::Human => {
            print_narrative(&payload);
            Ok(())
        }
    }
}

fn print_narrative(payload: &NarrativePayload) {
    println!("{}\n", payload.interpretation.text);

    if payload.stats.is_empty() {
        return;
    }
    println!("{}", "Statistics".bright_green().bold());
    for (name, stat) in payload.stats.iter() {
        println!(
            "  {:<14} min {:>10}  max {:>10}  mean {:>10}",
            name.bright_white().bold(),
            stat.min,
            stat.max,
            stat.mean
        );
    }
}
