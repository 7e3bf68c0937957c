use anyhow::Context;
use clap::Parser;
use las_processor::cli::{args::Args, commands};
use las_processor::error::LasError;
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    let args = Args::parse();

    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(e) = commands::setup_logging(command.logging()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<()> = runtime.block_on(async {
        let cancellation_token = CancellationToken::new();

        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation_token.cancel();
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(command, cancellation_token.clone()) => {
                result.context("command failed")
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(LasError::Interrupted {
                    reason: "interrupted by user".to_string(),
                }
                .into())
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LAS Processor - well-log parser and statistics engine");
    println!("=====================================================");
    println!();
    println!("USAGE:");
    println!("    las-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Show well metadata, curves and parse diagnostics");
    println!("    stats       Compute curve statistics and gas ratios");
    println!("    data        Emit depth-indexed curve series for charting");
    println!("    interpret   Produce a rules-based interpretation of an interval");
    println!("    convert     Convert a directory of LAS files to Parquet");
    println!();
    println!("EXAMPLES:");
    println!("    las-processor inspect well.las --diagnostics");
    println!("    las-processor stats well.las --curves HC1,HC2,HC3 --from 8000 --to 8500");
    println!("    las-processor data well.las --curves GR -n 10 > chart.json");
    println!("    las-processor convert ./logs --output ./parquet -j 8");
    println!();
    println!("For detailed help on any command, use:");
    println!("    las-processor <COMMAND> --help");
}
