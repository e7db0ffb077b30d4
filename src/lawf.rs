//! Illustrative LAWF (loss development by period) series
//!
//! PLACEHOLDER: this curve has no actuarial basis. It exists so the chart
//! panel has something anchored at known program figures to draw, and must be
//! replaced once real development factors are supplied:
//!
//! `loss(t) = max(0, selected_unl * 0.12 * exp(-0.18 * (t - 1)) + arch_loss * 0.02)`
//! for development periods t = 1..=12.

use crate::program::Program;
use serde::{Deserialize, Serialize};

/// Number of development periods in the series
pub const DEFAULT_LAWF_PERIODS: u32 = 12;

/// Share of selected UNL emerging in the first period
pub const DEFAULT_BASE_SHARE: f64 = 0.12;

/// Exponential decay per development period
pub const DEFAULT_DECAY_RATE: f64 = 0.18;

/// Share of arch loss added to every period
pub const DEFAULT_ARCH_SHARE: f64 = 0.02;

/// Parameters of the placeholder curve
///
/// The defaults reproduce the dashboard curve exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LawfParams {
    pub periods: u32,
    pub base_share: f64,
    pub decay_rate: f64,
    pub arch_share: f64,
}

impl Default for LawfParams {
    fn default() -> Self {
        Self {
            periods: DEFAULT_LAWF_PERIODS,
            base_share: DEFAULT_BASE_SHARE,
            decay_rate: DEFAULT_DECAY_RATE,
            arch_share: DEFAULT_ARCH_SHARE,
        }
    }
}

/// One point of the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LawfPoint {
    #[serde(rename = "Dev Period")]
    pub dev_period: u32,

    #[serde(rename = "Gross Loss ($000)")]
    pub gross_loss: f64,
}

/// Placeholder development series for one program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawfSeries {
    points: Vec<LawfPoint>,
}

impl LawfSeries {
    /// Build the series from selected UNL and arch loss
    ///
    /// Non-finite inputs are read as zero, matching absent program figures.
    pub fn from_inputs(selected_unl: f64, arch_loss: f64, params: &LawfParams) -> Self {
        let base = if selected_unl.is_finite() { selected_unl } else { 0.0 };
        let arch = if arch_loss.is_finite() { arch_loss } else { 0.0 };

        let points = (1..=params.periods)
            .map(|t| {
                let decay = (-params.decay_rate * f64::from(t - 1)).exp();
                let loss = base * params.base_share * decay + arch * params.arch_share;
                LawfPoint {
                    dev_period: t,
                    gross_loss: loss.max(0.0),
                }
            })
            .collect();

        Self { points }
    }

    /// Series for a program, absent figures read as zero
    pub fn for_program(program: &Program, params: &LawfParams) -> Self {
        Self::from_inputs(program.selected_unl_or_zero(), program.arch_loss_or_zero(), params)
    }

    pub fn points(&self) -> &[LawfPoint] {
        &self.points
    }

    /// Gross loss at a development period (1-based)
    pub fn value_at(&self, dev_period: u32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.dev_period == dev_period)
            .map(|p| p.gross_loss)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
