//! Rules-based interpretation of an interval
//!
//! Deterministic text used when no language model is available to write
//! the interpretation. The wording is chosen from the unrounded mean total
//! gas and mean methane; curves missing from the statistics count as zero.
//! Numbers quoted in the text use narrative precision.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::constants::gas_curves::{METHANE, TOTAL_GAS};
use crate::constants::{
    MODERATE_TOTAL_GAS, NARRATIVE_PRECISION, SIGNIFICANT_METHANE, SIGNIFICANT_TOTAL_GAS,
};
use crate::stats::{CurveStatistics, GasRatioSet, round_to};

/// Strength of the hydrocarbon shows in an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowLevel {
    Significant,
    Moderate,
    Low,
}

impl ShowLevel {
    pub fn classify(mean_total_gas: f64, mean_methane: f64) -> Self {
        if mean_total_gas > SIGNIFICANT_TOTAL_GAS || mean_methane > SIGNIFICANT_METHANE {
            ShowLevel::Significant
        } else if mean_total_gas > MODERATE_TOTAL_GAS {
            ShowLevel::Moderate
        } else {
            ShowLevel::Low
        }
    }
}

/// Markdown interpretation and the level it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub level: ShowLevel,
    pub text: String,
}

fn mean_or_zero(stats: &CurveStatistics, curve: &str) -> f64 {
    stats.get(curve).map(|s| s.mean).unwrap_or(0.0)
}

fn shown(value: f64) -> String {
    format!(
        "{:.*}",
        NARRATIVE_PRECISION as usize,
        round_to(value, NARRATIVE_PRECISION)
    )
}

/// Build the fallback interpretation for an interval
///
/// `stats` must be unrounded so means just above a threshold classify
/// on the right side of it.
pub fn interpret(
    stats: &CurveStatistics,
    ratios: Option<&GasRatioSet>,
    depth_range: Option<(f64, f64)>,
) -> Interpretation {
    let total_gas = mean_or_zero(stats, TOTAL_GAS);
    let methane = mean_or_zero(stats, METHANE);
    let level = ShowLevel::classify(total_gas, methane);

    let mut text = String::from("### Geological Analysis Summary\n\n");
    match depth_range {
        Some((from, to)) => {
            let _ = write!(text, "Interval **{} to {} ft** was evaluated. ", from, to);
        }
        None => text.push_str("The full logged interval was evaluated. "),
    }

    match level {
        ShowLevel::Significant => {
            text.push_str("The readings point to **significant hydrocarbon potential**. ");
            let _ = write!(
                text,
                "`{}` averages **{} units** and the light components (HC1/HC2) track it closely. ",
                TOTAL_GAS,
                shown(total_gas)
            );
            text.push_str(
                "A porous, permeable formation holding gas-phase hydrocarbons is the likely source. \
                 Recommendation: check gamma ray and resistivity logs to confirm reservoir \
                 boundaries and water saturation.",
            );
        }
        ShowLevel::Moderate => {
            text.push_str(
                "The interval carries **moderate gas shows**, in line with background levels \
                 of a transition zone or a low-quality reservoir. ",
            );
            let _ = write!(
                text,
                "Variation in HC1 (mean {}) suggests isolated gas pockets or tight-sand potential. ",
                shown(methane)
            );
            text.push_str(
                "Recommendation: review mechanical properties for hydraulic fracturing viability.",
            );
        }
        ShowLevel::Low => {
            text.push_str(
                "The interval shows **low hydrocarbon indicators**, consistent with \
                 non-productive source rock or an impermeable seal (shale/marl). \
                 Baseline signatures are stable with little formation fluid influx.",
            );
        }
    }

    if let Some(ratios) = ratios {
        let report = ratios.report();
        let _ = write!(
            text,
            "\n\nGas wetness is {} with a balance index of {}, suggesting **{}**.",
            report.gas_wetness, report.balance_index, report.interpretation_hint
        );
    }

    Interpretation { level, text }
}
