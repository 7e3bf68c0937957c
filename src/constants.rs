//! Application constants for the LAS processor
//!
//! Domain constants, section markers, mnemonic tables and default values
//! used throughout the crate.

// =============================================================================
// Section Markers
// =============================================================================

/// Version information section
pub const SECTION_VERSION: &str = "~V";

/// Well information section
pub const SECTION_WELL: &str = "~W";

/// Curve information section
pub const SECTION_CURVE: &str = "~C";

/// ASCII log data section
pub const SECTION_ASCII: &str = "~A";

/// Prefix shared by every section marker
pub const SECTION_PREFIX: char = '~';

/// Comment line prefix
pub const COMMENT_PREFIX: char = '#';

/// Curve section header artifacts that are never curves
pub const CURVE_HEADER_ARTIFACTS: &[&str] = &["MNEM", "#"];

// =============================================================================
// Header Mnemonics
// =============================================================================

/// Header mnemonics mapped to metadata fields
pub mod mnemonics {
    pub const START_DEPTH: &str = "STRT";
    pub const STOP_DEPTH: &str = "STOP";
    pub const STEP: &str = "STEP";
    pub const NULL_VALUE: &str = "NULL";
    pub const WELL_NAME: &str = "WELL";
    pub const COMPANY: &str = "COMP";
    pub const FIELD: &str = "FLD";
    pub const LOCATION: &str = "LOC";
    pub const COUNTRY: &str = "CTRY";
    pub const DATE: &str = "DATE";
}

/// Well name used when the file declares none
pub const DEFAULT_WELL_NAME: &str = "Unknown";

/// Well names too generic to identify a well on their own
pub const GENERIC_WELL_NAMES: &[&str] = &["WELL1", "UNKNOWN", "WELL", "N/A"];

// =============================================================================
// Statistics Constants
// =============================================================================

/// Values at or below this threshold are "no reading" sentinels
///
/// Fixed domain constant; the header `NULL` value is parsed but not used
/// for filtering.
pub const SENTINEL_THRESHOLD: f64 = -900.0;

/// Decimal places for statistics rendered on charts
pub const CHART_PRECISION: u32 = 4;

/// Decimal places for statistics used to ground narrative text
pub const NARRATIVE_PRECISION: u32 = 2;

/// Decimal places for gas ratio output
pub const GAS_RATIO_PRECISION: u32 = 2;

// =============================================================================
// Gas Ratio Constants
// =============================================================================

/// Light hydrocarbon curves required for gas ratio analysis
pub mod gas_curves {
    pub const METHANE: &str = "HC1";
    pub const ETHANE: &str = "HC2";
    pub const PROPANE: &str = "HC3";
    pub const TOTAL_GAS: &str = "TOTAL_GAS";
}

/// Wetness (percent) below which the interval is classified as dry gas
pub const GAS_WETNESS_THRESHOLD: f64 = 5.0;

/// Fluid hint for dry gas
pub const HINT_GAS: &str = "Gas";

/// Fluid hint for wet gas and liquids
pub const HINT_CONDENSATE_OIL: &str = "Condensate/Oil";

// =============================================================================
// Narrative Thresholds
// =============================================================================

/// Mean total gas above which an interval shows significant potential
pub const SIGNIFICANT_TOTAL_GAS: f64 = 500.0;

/// Mean methane above which an interval shows significant potential
pub const SIGNIFICANT_METHANE: f64 = 100.0;

/// Mean total gas above which an interval shows moderate gas
pub const MODERATE_TOTAL_GAS: f64 = 100.0;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default file name pattern for discovery
pub const DEFAULT_FILE_PATTERN: &str = "*.las";

/// Extension of per-well output files
pub const PARQUET_EXTENSION: &str = "parquet";

/// Name of the depth column in Parquet output
pub const DEPTH_COLUMN: &str = "depth";

/// Batch summary file name
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Default decimation stride (no decimation)
pub const DEFAULT_DOWNSAMPLE: usize = 1;
