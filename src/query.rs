//! Curve queries over a parsed well
//!
//! A [`CurveQuery`] names the curves, depth window and display stride a
//! caller wants. [`QueryEngine`] validates it and produces either a
//! [`ChartPayload`] for plotting or a [`NarrativePayload`] for grounding
//! interpretation text. Statistics always cover the whole window; only the
//! plotted series are decimated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProcessorConfig;
use crate::error::{LasError, Result};
use crate::models::{CurveMap, SampleMatrix};
use crate::narrative::{self, Interpretation};
use crate::stats::{
    CurveStatistics, GasRatioReport, GasRatioSet, NarrativeStatistics, StatisticsEngine,
    chart_statistics, decimate, narrative_statistics,
};

/// Curve selection, depth window and display stride
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveQuery {
    /// Curves to include; every curve of the well when absent
    pub curves: Option<Vec<String>>,
    pub depth_from: Option<f64>,
    pub depth_to: Option<f64>,
    /// Keep every n-th row of the plotted series
    pub downsample: Option<usize>,
}

impl CurveQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_curves<I, S>(mut self, curves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.curves = Some(curves.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_depth_range(mut self, from: f64, to: f64) -> Self {
        self.depth_from = Some(from);
        self.depth_to = Some(to);
        self
    }

    pub fn with_downsample(mut self, stride: usize) -> Self {
        self.downsample = Some(stride);
        self
    }

    /// Reject queries the core cannot answer meaningfully
    pub fn validate(&self) -> Result<()> {
        if let Some(curves) = &self.curves {
            if curves.is_empty() {
                return Err(LasError::invalid_query("curve list is empty"));
            }
            if curves.iter().any(|c| c.trim().is_empty()) {
                return Err(LasError::invalid_query("curve names must not be blank"));
            }
        }

        for (label, bound) in [("depth_from", self.depth_from), ("depth_to", self.depth_to)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(LasError::invalid_query(format!(
                        "{} must be finite, got {}",
                        label, value
                    )));
                }
            }
        }

        if let (Some(from), Some(to)) = (self.depth_from, self.depth_to) {
            if from > to {
                return Err(LasError::invalid_query(format!(
                    "depth_from ({}) is greater than depth_to ({})",
                    from, to
                )));
            }
        }

        if self.downsample == Some(0) {
            return Err(LasError::invalid_query("downsample must be at least 1"));
        }

        Ok(())
    }

    /// Both bounds, when the query restricts depth
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        self.depth_from.zip(self.depth_to)
    }

    /// Rows the query covers, ordered by depth
    pub fn window(&self, matrix: &SampleMatrix) -> SampleMatrix {
        match self.depth_range() {
            Some((from, to)) => matrix.depth_window(from, to),
            None => matrix.sorted_by_depth(),
        }
    }

    /// Requested curves, or every curve of the matrix
    pub fn selection(&self, matrix: &SampleMatrix) -> Vec<String> {
        match &self.curves {
            Some(curves) => curves.iter().map(|c| c.trim().to_string()).collect(),
            None => matrix.curves().to_vec(),
        }
    }
}

/// Series and statistics for plotting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartPayload {
    pub depths: Vec<f64>,
    pub curves: CurveMap<Vec<Option<f64>>>,
    pub stats: CurveStatistics,
}

/// Coarse statistics, gas ratios and a rules-based reading of them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativePayload {
    pub depth_from: Option<f64>,
    pub depth_to: Option<f64>,
    pub curves: Vec<String>,
    pub stats: NarrativeStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_ratios: Option<GasRatioReport>,
    pub interpretation: Interpretation,
}

/// Answers curve queries with a fixed configuration
#[derive(Debug, Clone)]
pub struct QueryEngine {
    config: ProcessorConfig,
    statistics: StatisticsEngine,
}

impl QueryEngine {
    pub fn new(config: ProcessorConfig) -> Self {
        let statistics = StatisticsEngine::from_config(&config);
        Self { config, statistics }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Full-precision statistics over the query window
    pub fn statistics(&self, matrix: &SampleMatrix, query: &CurveQuery) -> Result<CurveStatistics> {
        query.validate()?;
        let window = query.window(matrix);
        Ok(self.statistics.compute(&window, &query.selection(matrix)))
    }

    /// Decimated series plus chart-precision statistics
    pub fn chart(&self, matrix: &SampleMatrix, query: &CurveQuery) -> Result<ChartPayload> {
        query.validate()?;

        let window = query.window(matrix);
        let selection = query.selection(matrix);
        let stride = query.downsample.unwrap_or(self.config.default_downsample);

        let stats = self.statistics.compute(&window, &selection);
        let view = decimate(window.rows(), stride);

        let mut curves = CurveMap::new();
        for name in &selection {
            let Some(index) = window.curve_index(name) else {
                continue;
            };
            curves.insert(name.as_str(), view.iter().map(|row| row.value(index)).collect());
        }

        debug!(
            "Chart query: {} of {} rows (stride {}), {} curves",
            view.len(),
            window.row_count(),
            stride,
            curves.len()
        );

        Ok(ChartPayload {
            depths: view.iter().map(|row| row.depth).collect(),
            curves,
            stats: chart_statistics(&stats, self.config.chart_precision),
        })
    }

    /// Narrative-precision statistics, gas ratios and fallback interpretation
    pub fn narrative(&self, matrix: &SampleMatrix, query: &CurveQuery) -> Result<NarrativePayload> {
        query.validate()?;

        let window = query.window(matrix);
        let selection = query.selection(matrix);
        let stats = self.statistics.compute(&window, &selection);
        let ratios = GasRatioSet::from_statistics(&stats);
        let narrative_stats = narrative_statistics(&stats, self.config.narrative_precision);

        let interpretation = narrative::interpret(&stats, ratios.as_ref(), query.depth_range());

        Ok(NarrativePayload {
            depth_from: query.depth_from,
            depth_to: query.depth_to,
            curves: selection,
            stats: narrative_stats,
            gas_ratios: ratios.map(|r| r.report()),
            interpretation,
        })
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}
