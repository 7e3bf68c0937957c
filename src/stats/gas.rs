//! Light-hydrocarbon gas ratios derived from HC1..HC3 curve means

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CurveStatistics, round_to};
use crate::constants::gas_curves::{ETHANE, METHANE, PROPANE};
use crate::constants::{GAS_RATIO_PRECISION, GAS_WETNESS_THRESHOLD, HINT_CONDENSATE_OIL, HINT_GAS};

/// Coarse fluid classification from the wetness ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidHint {
    #[serde(rename = "Gas")]
    Gas,
    #[serde(rename = "Condensate/Oil")]
    CondensateOil,
}

impl FluidHint {
    /// Dry gas strictly below the wetness threshold
    pub fn from_wetness(wetness: f64) -> Self {
        if wetness < GAS_WETNESS_THRESHOLD {
            FluidHint::Gas
        } else {
            FluidHint::CondensateOil
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FluidHint::Gas => HINT_GAS,
            FluidHint::CondensateOil => HINT_CONDENSATE_OIL,
        }
    }
}

impl fmt::Display for FluidHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrounded ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasRatioSet {
    /// Percentage of heavier components in the total
    pub wetness: f64,
    /// HC1 / (HC2 + HC3), zero when the heavier components sum to zero
    pub balance: f64,
    pub hint: FluidHint,
}

impl GasRatioSet {
    /// Ratios from the three means, `None` unless HC1 is positive and
    /// the total is non-zero
    pub fn from_means(hc1: f64, hc2: f64, hc3: f64) -> Option<Self> {
        if hc1 <= 0.0 {
            return None;
        }

        let heavy = hc2 + hc3;
        let total = hc1 + heavy;
        if total == 0.0 {
            return None;
        }

        let wetness = heavy / total * 100.0;
        let balance = if heavy == 0.0 { 0.0 } else { hc1 / heavy };

        Some(Self {
            wetness,
            balance,
            hint: FluidHint::from_wetness(wetness),
        })
    }

    /// Ratios when HC1, HC2 and HC3 all have statistics
    pub fn from_statistics(statistics: &CurveStatistics) -> Option<Self> {
        let hc1 = statistics.get(METHANE)?;
        let hc2 = statistics.get(ETHANE)?;
        let hc3 = statistics.get(PROPANE)?;
        Self::from_means(hc1.mean, hc2.mean, hc3.mean)
    }

    pub fn report(&self) -> GasRatioReport {
        GasRatioReport {
            gas_wetness: format!(
                "{:.*}%",
                GAS_RATIO_PRECISION as usize,
                round_to(self.wetness, GAS_RATIO_PRECISION)
            ),
            balance_index: round_to(self.balance, GAS_RATIO_PRECISION),
            interpretation_hint: self.hint,
        }
    }
}

/// Presentation form of [`GasRatioSet`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasRatioReport {
    pub gas_wetness: String,
    pub balance_index: f64,
    pub interpretation_hint: FluidHint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SampleMatrix, SampleRow};
    use crate::stats::StatisticsEngine;

    #[test]
    fn test_wet_gas_ratios() {
        let ratios = GasRatioSet::from_means(80.0, 10.0, 5.0).unwrap();

        assert_eq!(ratios.hint, FluidHint::CondensateOil);
        let report = ratios.report();
        assert_eq!(report.gas_wetness, "15.79%");
        assert_eq!(report.balance_index, 5.33);
    }

    #[test]
    fn test_wetness_threshold_is_strict() {
        let ratios = GasRatioSet::from_means(95.0, 3.0, 2.0).unwrap();

        assert_eq!(ratios.report().gas_wetness, "5.00%");
        assert_eq!(ratios.hint, FluidHint::CondensateOil);

        let dry = GasRatioSet::from_means(99.0, 0.6, 0.4).unwrap();
        assert_eq!(dry.hint, FluidHint::Gas);
    }

    #[test]
    fn test_non_positive_methane_omitted() {
        assert!(GasRatioSet::from_means(0.0, 10.0, 5.0).is_none());
        assert!(GasRatioSet::from_means(-1.0, 10.0, 5.0).is_none());
    }

    #[test]
    fn test_zero_heavy_components() {
        let ratios = GasRatioSet::from_means(50.0, 0.0, 0.0).unwrap();

        assert_eq!(ratios.wetness, 0.0);
        assert_eq!(ratios.balance, 0.0);
        assert_eq!(ratios.hint, FluidHint::Gas);
    }

    #[test]
    fn test_requires_all_three_curves() {
        let curves = vec!["HC1".to_string(), "HC2".to_string(), "HC3".to_string()];
        let rows = vec![SampleRow {
            depth: 1.0,
            values: vec![Some(80.0), Some(10.0), Some(-999.25)],
        }];
        let matrix = SampleMatrix::new(curves, rows);
        let stats = StatisticsEngine::default().compute_all(&matrix);

        // HC3 has no valid values
        assert!(GasRatioSet::from_statistics(&stats).is_none());
    }

    #[test]
    fn test_from_statistics() {
        let curves = vec!["HC1".to_string(), "HC2".to_string(), "HC3".to_string()];
        let rows = vec![
            SampleRow {
                depth: 1.0,
                values: vec![Some(70.0), Some(12.0), Some(4.0)],
            },
            SampleRow {
                depth: 2.0,
                values: vec![Some(90.0), Some(8.0), Some(6.0)],
            },
        ];
        let matrix = SampleMatrix::new(curves, rows);
        let stats = StatisticsEngine::default().compute_all(&matrix);

        let ratios = GasRatioSet::from_statistics(&stats).unwrap();
        assert_eq!(ratios.report().gas_wetness, "15.79%");
    }

    #[test]
    fn test_report_serialization() {
        let report = GasRatioSet::from_means(80.0, 10.0, 5.0).unwrap().report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["gas_wetness"], "15.79%");
        assert_eq!(json["balance_index"], 5.33);
        assert_eq!(json["interpretation_hint"], "Condensate/Oil");
    }
}
