//! End-to-end tests for batch conversion of a LAS directory to Parquet

use las_processor::processor::BatchConverter;
use las_processor::{CompressionAlgorithm, LasError, ProcessorConfig};
use polars::prelude::{ParquetReader, SerReader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

fn write_well(dir: &Path, file: &str, well: &str, base_depth: f64) {
    let mut content = format!(
        "~V\n VERS. 2.0 : version\n~W\n WELL. {} : well\n NULL. -999.25 : null\n\
         ~C\n DEPT.F : depth\n HC1.ppm : methane\n HC2.ppm : ethane\n HC3.ppm : propane\n~A\n",
        well
    );
    for i in 0..20 {
        let depth = base_depth + i as f64 * 0.5;
        let hc1 = if i == 7 { -999.25 } else { 80.0 };
        content.push_str(&format!("{:.1} {} 10.0 5.0\n", depth, hc1));
    }
    fs::write(dir.join(file), content).unwrap();
}

#[tokio::test]
async fn test_convert_directory_end_to_end() {
    let input = TempDir::new().unwrap();
    write_well(input.path(), "a.las", "EAGLE-7", 1000.0);
    write_well(input.path(), "b.LAS", "EAGLE-7", 2000.0);
    fs::create_dir(input.path().join("nested")).unwrap();
    write_well(&input.path().join("nested"), "c.las", "WELL1", 3000.0);
    fs::write(input.path().join("notes.txt"), "not a log").unwrap();

    let output = TempDir::new().unwrap();
    let config = ProcessorConfig::default()
        .with_workers(2)
        .with_compression(CompressionAlgorithm::Zstd);
    let converter = BatchConverter::new(
        input.path().to_path_buf(),
        Some(output.path().to_path_buf()),
    )
    .unwrap()
    .with_config(config);

    let stats = converter.convert().await.unwrap();
    assert_eq!(stats.files_processed, 3);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.total_rows, 60);

    let file = fs::File::open(output.path().join("a.parquet")).unwrap();
    let df = ParquetReader::new(file).finish().unwrap();
    assert_eq!(df.height(), 20);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["depth", "DEPT", "HC1", "HC2", "HC3"]);

    let summary: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(converter.summary_path()).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["files_processed"], 3);

    let wells = summary["wells"].as_array().unwrap();
    let names: Vec<&str> = wells
        .iter()
        .map(|w| w["display_name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"EAGLE-7"));
    assert!(names.contains(&"EAGLE-7 (Copy 1)"));
    assert!(names.contains(&"WELL1 (c.las)"));

    // The sentinel row is excluded from the statistics
    assert_eq!(wells[0]["stats"]["HC1"]["count"], 19);
    assert_eq!(wells[0]["gas_ratios"]["gas_wetness"], "15.79%");
}

#[tokio::test]
async fn test_rerun_requires_force() {
    let input = TempDir::new().unwrap();
    write_well(input.path(), "a.las", "HAWK-1", 500.0);

    let converter = BatchConverter::new(input.path().to_path_buf(), None).unwrap();
    assert_eq!(converter.output_dir(), input.path().join("parquet"));
    converter.convert().await.unwrap();

    let again = BatchConverter::new(input.path().to_path_buf(), None).unwrap();
    assert!(matches!(
        again.convert().await,
        Err(LasError::OutputExists { .. })
    ));

    let forced = BatchConverter::new(input.path().to_path_buf(), None)
        .unwrap()
        .with_config(ProcessorConfig::default().with_force_overwrite());
    let stats = forced.convert().await.unwrap();
    assert_eq!(stats.files_processed, 1);
}

#[tokio::test]
async fn test_cancelled_conversion_reports_interrupt() {
    let input = TempDir::new().unwrap();
    write_well(input.path(), "a.las", "HAWK-1", 500.0);

    let cancel = CancellationToken::new();
    cancel.cancel();

    let output = TempDir::new().unwrap();
    let converter = BatchConverter::new(
        input.path().to_path_buf(),
        Some(output.path().to_path_buf()),
    )
    .unwrap()
    .with_cancellation(cancel);

    assert!(matches!(
        converter.convert().await,
        Err(LasError::Interrupted { .. })
    ));
    assert!(!converter.summary_path().exists());
}
