//! Command implementations for the LAS processor CLI
//!
//! Each command is implemented in its own module; `shared` holds logging
//! setup and the helpers they have in common.

pub mod convert;
pub mod data;
pub mod inspect;
pub mod interpret;
pub mod shared;
pub mod stats;

pub use shared::setup_logging;

use crate::cli::args::Commands;
use crate::error::Result;
use tokio_util::sync::CancellationToken;

/// Dispatch to the handler of the given subcommand
pub async fn run(command: Commands, cancel: CancellationToken) -> Result<()> {
    match command {
        Commands::Inspect(args) => inspect::run_inspect(args).await,
        Commands::Stats(args) => stats::run_stats(args).await,
        Commands::Data(args) => data::run_data(args).await,
        Commands::Interpret(args) => interpret::run_interpret(args).await,
        Commands::Convert(args) => convert::run_convert(args, cancel).await,
    }
}
