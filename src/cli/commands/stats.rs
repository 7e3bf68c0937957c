//! `stats`: curve statistics and gas ratios over a depth window

use super::shared::{load_well, print_json};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::error::Result;
use crate::query::QueryEngine;
use crate::stats::{CurveStatistics, GasRatioReport, GasRatioSet, chart_statistics};
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatsReport {
    stats: CurveStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas_ratios: Option<GasRatioReport>,
}

pub async fn run_stats(args: StatsArgs) -> Result<()> {
    let query = args.query.to_query();
    query.validate()?;

    let outcome = load_well(&args.file).await?;
    let engine = QueryEngine::new(args.query.to_config());
    let stats = engine.statistics(&outcome.record.matrix, &query)?;

    let report = StatsReport {
        gas_ratios: GasRatioSet::from_statistics(&stats).map(|r| r.report()),
        stats: chart_statistics(&stats, engine.config().chart_precision),
    };

    match args.output_format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Human => {
            print_report(&report);
            Ok(())
        }
    }
}

fn print_report(report: &StatsReport) {
    if report.stats.is_empty() {
        println!("{}", "No curve has valid readings in this window".bright_yellow());
        return;
    }

    println!(
        "{:<14} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "CURVE".bright_cyan(),
        "COUNT".bright_cyan(),
        "MIN".bright_cyan(),
        "MAX".bright_cyan(),
        "MEAN".bright_cyan(),
        "STD".bright_cyan(),
        "MAX AT".bright_cyan()
    );
    for (name, stat) in report.stats.iter() {
        println!(
            "{:<14} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
            name.bright_white().bold(),
            stat.count,
            stat.min,
            stat.max,
            stat.mean,
            stat.std,
            stat.max_at
        );
    }

    if let Some(ratios) = &report.gas_ratios {
        println!("\n{}", "Gas ratios".bright_green().bold());
        println!("  {} {}", "Wetness:".bright_cyan(), ratios.gas_wetness);
        println!("  {} {}", "Balance:".bright_cyan(), ratios.balance_index);
        println!(
            "  {} {}",
            "Hint:".bright_cyan(),
            ratios.interpretation_hint.to_string().bright_white().bold()
        );
    }
}
