//! `convert`: batch conversion to Parquet

use super::shared::print_json;
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::error::Result;
use crate::processor::BatchConverter;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub async fn run_convert(args: ConvertArgs, cancel: CancellationToken) -> Result<()> {
    let config = args.to_config();
    config.validate()?;
    debug!("Convert configuration: {:?}", config);

    let human = args.output_format == OutputFormat::Human;
    let converter = BatchConverter::new(args.input_path.clone(), args.output_path.clone())?
        .with_config(config)
        .with_cancellation(cancel)
        .with_progress(human && args.logging.show_progress());

    let stats = converter.convert().await?;
    info!(
        "Conversion finished in {}ms: {} converted, {} failed",
        stats.processing_time_ms, stats.files_processed, stats.files_failed
    );

    if !human {
        print_json(&stats)?;
    }
    Ok(())
}
