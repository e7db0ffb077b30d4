//! Row and column labels of the layer matrix

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layer matrix row: one treaty-layer metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerMetric {
    #[serde(rename = "Description")]
    Description,
    /// Underwriting year
    #[serde(rename = "UY")]
    UnderwritingYear,
    #[serde(rename = "Currency")]
    Currency,
    #[serde(rename = "Placed")]
    Placed,
    /// Number of reinstatements
    #[serde(rename = "Reinst")]
    Reinstatements,
    #[serde(rename = "Contract Limit")]
    ContractLimit,
    #[serde(rename = "Occ Limit")]
    OccurrenceLimit,
    #[serde(rename = "Attachment")]
    Attachment,
    #[serde(rename = "Share %")]
    SharePct,
    #[serde(rename = "Share - Occ Limit")]
    ShareOccurrenceLimit,
    /// Rate on line
    #[serde(rename = "ROL")]
    RateOnLine,
    #[serde(rename = "Reported UNL")]
    ReportedUnl,
    #[serde(rename = "Selected UNL")]
    SelectedUnl,
    #[serde(rename = "100% Layer Loss")]
    FullLayerLoss,
    #[serde(rename = "Share Layer Loss")]
    ShareLayerLoss,
    #[serde(rename = "Share Limit remaining")]
    ShareLimitRemaining,
    #[serde(rename = "Net Layer Loss")]
    NetLayerLoss,
    #[serde(rename = "Reinst Prem")]
    ReinstatementPremium,
    #[serde(rename = "Net Reinst Prem")]
    NetReinstatementPremium,
    #[serde(rename = "Net of RIP Layer Loss")]
    NetOfRipLayerLoss,
}

/// Metric rows in display order
pub const LAYER_METRICS: [LayerMetric; 20] = [
    LayerMetric::Description,
    LayerMetric::UnderwritingYear,
    LayerMetric::Currency,
    LayerMetric::Placed,
    LayerMetric::Reinstatements,
    LayerMetric::ContractLimit,
    LayerMetric::OccurrenceLimit,
    LayerMetric::Attachment,
    LayerMetric::SharePct,
    LayerMetric::ShareOccurrenceLimit,
    LayerMetric::RateOnLine,
    LayerMetric::ReportedUnl,
    LayerMetric::SelectedUnl,
    LayerMetric::FullLayerLoss,
    LayerMetric::ShareLayerLoss,
    LayerMetric::ShareLimitRemaining,
    LayerMetric::NetLayerLoss,
    LayerMetric::ReinstatementPremium,
    LayerMetric::NetReinstatementPremium,
    LayerMetric::NetOfRipLayerLoss,
];

impl LayerMetric {
    /// Row label as shown in the layer detail grid
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerMetric::Description => "Description",
            LayerMetric::UnderwritingYear => "UY",
            LayerMetric::Currency => "Currency",
            LayerMetric::Placed => "Placed",
            LayerMetric::Reinstatements => "Reinst",
            LayerMetric::ContractLimit => "Contract Limit",
            LayerMetric::OccurrenceLimit => "Occ Limit",
            LayerMetric::Attachment => "Attachment",
            LayerMetric::SharePct => "Share %",
            LayerMetric::ShareOccurrenceLimit => "Share - Occ Limit",
            LayerMetric::RateOnLine => "ROL",
            LayerMetric::ReportedUnl => "Reported UNL",
            LayerMetric::SelectedUnl => "Selected UNL",
            LayerMetric::FullLayerLoss => "100% Layer Loss",
            LayerMetric::ShareLayerLoss => "Share Layer Loss",
            LayerMetric::ShareLimitRemaining => "Share Limit remaining",
            LayerMetric::NetLayerLoss => "Net Layer Loss",
            LayerMetric::ReinstatementPremium => "Reinst Prem",
            LayerMetric::NetReinstatementPremium => "Net Reinst Prem",
            LayerMetric::NetOfRipLayerLoss => "Net of RIP Layer Loss",
        }
    }

    /// Whether the row is financially aggregated into the Total column
    ///
    /// Description and Currency hold labels, never amounts.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, LayerMetric::Description | LayerMetric::Currency)
    }
}

impl fmt::Display for LayerMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LAYER_METRICS
            .iter()
            .copied()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown layer metric: {}", s))
    }
}

/// Layer matrix column holding one slice of coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayerSlot {
    #[serde(rename = "Layer 1")]
    Layer1,
    #[serde(rename = "Layer 2")]
    Layer2,
    #[serde(rename = "Layer 3")]
    Layer3,
    #[serde(rename = "Layer 4")]
    Layer4,
    #[serde(rename = "Layer 5")]
    Layer5,
    #[serde(rename = "Layer 6")]
    Layer6,
    #[serde(rename = "Layer 7")]
    Layer7,
    #[serde(rename = "Layer 8")]
    Layer8,
    #[serde(rename = "Inuring 1")]
    Inuring1,
    #[serde(rename = "Inuring 2")]
    Inuring2,
    #[serde(rename = "Inuring 3")]
    Inuring3,
}

/// Number of layer-slot columns (excluding Total)
pub const SLOT_COUNT: usize = 11;

/// Layer-slot columns in display order
pub const LAYER_SLOTS: [LayerSlot; SLOT_COUNT] = [
    LayerSlot::Layer1,
    LayerSlot::Layer2,
    LayerSlot::Layer3,
    LayerSlot::Layer4,
    LayerSlot::Layer5,
    LayerSlot::Layer6,
    LayerSlot::Layer7,
    LayerSlot::Layer8,
    LayerSlot::Inuring1,
    LayerSlot::Inuring2,
    LayerSlot::Inuring3,
];

/// Header of the derived column
pub const TOTAL_COLUMN: &str = "Total";

/// Header of the row label column
pub const METRIC_COLUMN: &str = "Metric";

impl LayerSlot {
    /// Column header as shown in the layer detail grid
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerSlot::Layer1 => "Layer 1",
            LayerSlot::Layer2 => "Layer 2",
            LayerSlot::Layer3 => "Layer 3",
            LayerSlot::Layer4 => "Layer 4",
            LayerSlot::Layer5 => "Layer 5",
            LayerSlot::Layer6 => "Layer 6",
            LayerSlot::Layer7 => "Layer 7",
            LayerSlot::Layer8 => "Layer 8",
            LayerSlot::Inuring1 => "Inuring 1",
            LayerSlot::Inuring2 => "Inuring 2",
            LayerSlot::Inuring3 => "Inuring 3",
        }
    }

    /// Position of the slot within a row
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// True for the Inuring 1..3 columns
    pub fn is_inuring(&self) -> bool {
        matches!(self, LayerSlot::Inuring1 | LayerSlot::Inuring2 | LayerSlot::Inuring3)
    }
}

impl fmt::Display for LayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
