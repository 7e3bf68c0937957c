//! Curve statistics over a sample matrix
//!
//! Statistics are computed over the *valid* values of a curve: present in
//! the row and strictly greater than the sentinel threshold (−900 unless
//! configured otherwise). A curve with no valid value is left out of the
//! result instead of being reported as zero.
//!
//! Rounding is a presentation step applied to a finished result:
//! [`CurveStatistic::rounded`] for charts and
//! [`NarrativeStatistic`] for grounding narrative text.
//!
//! - [`downsample`] - stride decimation for display
//! - [`gas`] - light-hydrocarbon ratios over HC1..HC3 means

pub mod downsample;
pub mod gas;

pub use downsample::decimate;
pub use gas::{FluidHint, GasRatioReport, GasRatioSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProcessorConfig;
use crate::constants::SENTINEL_THRESHOLD;
use crate::models::{CurveMap, SampleMatrix, SampleRow};

/// Summary of one curve's valid values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveStatistic {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub count: usize,
    /// Depth of the first row, in row order, holding the maximum
    pub max_at: f64,
}

impl CurveStatistic {
    /// Copy with every float rounded to `places` decimals
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            min: round_to(self.min, places),
            max: round_to(self.max, places),
            mean: round_to(self.mean, places),
            std: round_to(self.std, places),
            count: self.count,
            max_at: round_to(self.max_at, places),
        }
    }

    /// Range-and-mean projection used for narrative grounding
    pub fn narrative(&self, places: u32) -> NarrativeStatistic {
        NarrativeStatistic {
            min: round_to(self.min, places),
            max: round_to(self.max, places),
            mean: round_to(self.mean, places),
        }
    }
}

/// Coarse projection of a [`CurveStatistic`] for narrative text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NarrativeStatistic {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Statistics keyed by curve, in selection order
pub type CurveStatistics = CurveMap<CurveStatistic>;

/// Narrative statistics keyed by curve, in selection order
pub type NarrativeStatistics = CurveMap<NarrativeStatistic>;

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}

/// Computes per-curve statistics with a sentinel filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsEngine {
    sentinel_threshold: f64,
}

impl StatisticsEngine {
    pub fn new(sentinel_threshold: f64) -> Self {
        Self { sentinel_threshold }
    }

    pub fn from_config(config: &ProcessorConfig) -> Self {
        Self::new(config.sentinel_threshold)
    }

    pub fn sentinel_threshold(&self) -> f64 {
        self.sentinel_threshold
    }

    /// Whether a reading counts toward statistics
    pub fn is_valid(&self, value: f64) -> bool {
        value > self.sentinel_threshold
    }

    /// Statistics for the curve at `index`, `None` without valid values
    ///
    /// Two passes over the rows: extremes and sum first, then squared
    /// deviations from the mean.
    pub fn curve_statistic(&self, rows: &[SampleRow], index: usize) -> Option<CurveStatistic> {
        let valid = || {
            rows.iter().filter_map(move |row| {
                row.value(index)
                    .filter(|&value| self.is_valid(value))
                    .map(|value| (row.depth, value))
            })
        };

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut max_at = f64::NAN;

        for (depth, value) in valid() {
            if count == 0 || value > max {
                max = value;
                max_at = depth;
            }
            if value < min {
                min = value;
            }
            sum += value;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let mean = sum / count as f64;
        let variance = valid()
            .map(|(_, value)| (value - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        Some(CurveStatistic {
            min,
            max,
            mean,
            std: variance.sqrt(),
            count,
            max_at,
        })
    }

    /// Statistics for each selected curve present in the matrix
    ///
    /// Unknown curves and curves without valid values are omitted;
    /// repeated selections are computed once.
    pub fn compute<S: AsRef<str>>(&self, matrix: &SampleMatrix, selection: &[S]) -> CurveStatistics {
        let mut statistics = CurveStatistics::new();

        for name in selection {
            let name = name.as_ref();
            if statistics.contains(name) {
                continue;
            }
            let Some(index) = matrix.curve_index(name) else {
                debug!("Curve {} not present, no statistics", name);
                continue;
            };
            match self.curve_statistic(matrix.rows(), index) {
                Some(statistic) => {
                    statistics.insert(name, statistic);
                }
                None => debug!("Curve {} has no valid values", name),
            }
        }

        statistics
    }

    /// Statistics for every curve of the matrix
    pub fn compute_all(&self, matrix: &SampleMatrix) -> CurveStatistics {
        self.compute(matrix, matrix.curves())
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(SENTINEL_THRESHOLD)
    }
}

/// Round every statistic for chart display
pub fn chart_statistics(statistics: &CurveStatistics, places: u32) -> CurveStatistics {
    statistics.map(|statistic| statistic.rounded(places))
}

/// Project statistics for narrative grounding
pub fn narrative_statistics(statistics: &CurveStatistics, places: u32) -> NarrativeStatistics {
    statistics.map(|statistic| statistic.narrative(places))
}
