//! Layer matrix: treaty metrics (rows) by layer slot (columns) plus Total
//!
//! The Total column is derived, never entered:
//! - numeric metric rows: Total = sum of the 11 slot cells, cells that are
//!   empty or do not parse as a number contributing 0, saturating at
//!   `±f64::MAX`
//! - Description and Currency rows: Total is `None`
//!
//! `compute_totals` re-derives it and is idempotent.

use super::metric::{LayerMetric, LayerSlot, LAYER_METRICS, SLOT_COUNT};
use crate::error::ReservingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label placed in the Layer 1 Description cell of a new matrix
pub const DEFAULT_DESCRIPTION: &str = "Default Layer Setup";

/// One editable cell of the layer grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl Cell {
    /// Numeric value of the cell, if it has one
    ///
    /// Text counts when it parses as a finite number ("1,000" does not).
    /// NaN and infinities are treated as not-a-number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            Cell::Number(_) => None,
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            Cell::Empty => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Parse raw grid input: blank is empty, numbers are numbers, anything else text
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(v) = trimmed.parse::<f64>() {
            Cell::Number(v)
        } else {
            Cell::Text(raw.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Number(f64::from(v))
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

/// One metric row across all layer slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRow {
    pub metric: LayerMetric,

    /// Cells in `LAYER_SLOTS` order
    pub cells: [Cell; SLOT_COUNT],

    /// Derived Total column
    #[serde(default)]
    pub total: Option<f64>,
}

impl LayerRow {
    /// Row with every slot set to zero
    pub fn zeroed(metric: LayerMetric) -> Self {
        Self::filled(metric, Cell::Number(0.0))
    }

    /// Row with every slot set to `value`
    pub fn filled(metric: LayerMetric, value: Cell) -> Self {
        Self {
            metric,
            cells: std::array::from_fn(|_| value.clone()),
            total: None,
        }
    }

    pub fn cell(&self, slot: LayerSlot) -> &Cell {
        &self.cells[slot.index()]
    }

    /// Total this row should carry given its current cells
    ///
    /// Saturates at `±f64::MAX` so a numeric row always carries a finite total.
    pub fn derived_total(&self) -> Option<f64> {
        if !self.metric.is_numeric() {
            return None;
        }
        let sum: f64 = self.cells.iter().map(|c| c.as_number().unwrap_or(0.0)).sum();
        Some(sum.clamp(-f64::MAX, f64::MAX))
    }
}

/// Per-program table of treaty-layer metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMatrix {
    rows: Vec<LayerRow>,
}

impl LayerMatrix {
    /// Build a matrix from rows as given (no validation, totals untouched)
    pub fn from_rows(rows: Vec<LayerRow>) -> Self {
        Self { rows }
    }

    /// Standard 20-row matrix with every slot zero
    pub fn zeroed() -> Self {
        Self {
            rows: LAYER_METRICS.iter().map(|&m| LayerRow::zeroed(m)).collect(),
        }
        .compute_totals()
    }

    /// Default matrix for a program seen for the first time
    ///
    /// All slots start at zero, except:
    /// - UY: accident year in every slot
    /// - Currency: currency code in every slot
    /// - Selected UNL and Reported UNL: `selected_unl` in Layer 1
    /// - Description: `DEFAULT_DESCRIPTION` in Layer 1, empty elsewhere
    ///
    /// Reported UNL is a placeholder copy of Selected UNL, not an estimate.
    pub fn with_defaults(accident_year: i32, currency: &str, selected_unl: f64) -> Self {
        let rows = LAYER_METRICS
            .iter()
            .map(|&metric| match metric {
                LayerMetric::UnderwritingYear => LayerRow::filled(metric, Cell::from(accident_year)),
                LayerMetric::Currency => LayerRow::filled(metric, Cell::from(currency)),
                LayerMetric::Description => {
                    let mut row = LayerRow::filled(metric, Cell::Empty);
                    row.cells[LayerSlot::Layer1.index()] = Cell::from(DEFAULT_DESCRIPTION);
                    row
                }
                LayerMetric::SelectedUnl | LayerMetric::ReportedUnl => {
                    let mut row = LayerRow::zeroed(metric);
                    row.cells[LayerSlot::Layer1.index()] = Cell::Number(selected_unl);
                    row
                }
                _ => LayerRow::zeroed(metric),
            })
            .collect();

        Self { rows }.compute_totals()
    }

    /// Return a copy with the Total column re-derived
    ///
    /// Slot cells are copied unchanged. Never fails: anything that is not a
    /// number contributes zero.
    pub fn compute_totals(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| LayerRow {
                metric: row.metric,
                cells: row.cells.clone(),
                total: row.derived_total(),
            })
            .collect();

        Self { rows }
    }

    /// True when every row's Total matches its cells
    pub fn totals_are_current(&self) -> bool {
        self.rows.iter().all(|row| match (row.total, row.derived_total()) {
            (None, None) => true,
            (Some(a), Some(b)) => (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0),
            _ => false,
        })
    }

    /// Check the rows are the standard metrics in display order
    pub fn check_metrics(&self) -> Result<(), ReservingError> {
        let rows = self.rows.len().max(LAYER_METRICS.len());
        for row in 0..rows {
            let expected = LAYER_METRICS.get(row).copied();
            let found = self.rows.get(row).map(|r| r.metric);
            if expected != found {
                return Err(ReservingError::LayerMetricMismatch {
                    row,
                    expected: expected.map(|m| m.to_string()),
                    found: found.map(|m| m.to_string()),
                });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> &[LayerRow] {
        &self.rows
    }

    pub fn row(&self, metric: LayerMetric) -> Option<&LayerRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }

    pub fn cell(&self, metric: LayerMetric, slot: LayerSlot) -> Option<&Cell> {
        self.row(metric).map(|r| r.cell(slot))
    }

    /// Stored Total for a metric (`None` for label rows or a missing row)
    pub fn total(&self, metric: LayerMetric) -> Option<f64> {
        self.row(metric).and_then(|r| r.total)
    }

    /// Overwrite one cell; returns false when the metric row is absent
    ///
    /// Totals are not touched; run `compute_totals` after editing.
    pub fn set_cell(&mut self, metric: LayerMetric, slot: LayerSlot, value: impl Into<Cell>) -> bool {
        match self.rows.iter_mut().find(|r| r.metric == metric) {
            Some(row) => {
                row.cells[slot.index()] = value.into();
                true
            }
            None => false,
        }
    }
}

impl Default for LayerMatrix {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::metric::LAYER_SLOTS;
    use approx::assert_relative_eq;

    #[test]
    fn test_cell_as_number() {
        assert_eq!(Cell::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Cell::Text(" 42 ".to_string()).as_number(), Some(42.0));
        assert_eq!(Cell::Text("USD".to_string()).as_number(), None);
        assert_eq!(Cell::Text("1,000".to_string()).as_number(), None);
        assert_eq!(Cell::Number(f64::NAN).as_number(), None);
        assert_eq!(Cell::Text("inf".to_string()).as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
    }

    #[test]
    fn test_cell_parse() {
        assert_eq!(Cell::parse(""), Cell::Empty);
        assert_eq!(Cell::parse("  "), Cell::Empty);
        assert_eq!(Cell::parse("1500"), Cell::Number(1500.0));
        assert_eq!(Cell::parse("XS of 10m"), Cell::Text("XS of 10m".to_string()));
    }

    #[test]
    fn test_default_matrix() {
        let m = LayerMatrix::with_defaults(2023, "USD", 1000.0);
        assert!(m.check_metrics().is_ok());

        for slot in LAYER_SLOTS {
            assert_eq!(m.cell(LayerMetric::UnderwritingYear, slot), Some(&Cell::Number(2023.0)));
            assert_eq!(m.cell(LayerMetric::Currency, slot), Some(&Cell::Text("USD".to_string())));
        }

        assert_eq!(m.cell(LayerMetric::SelectedUnl, LayerSlot::Layer1), Some(&Cell::Number(1000.0)));
        assert_eq!(m.cell(LayerMetric::ReportedUnl, LayerSlot::Layer1), Some(&Cell::Number(1000.0)));
        for slot in &LAYER_SLOTS[1..] {
            assert_eq!(m.cell(LayerMetric::SelectedUnl, *slot), Some(&Cell::Number(0.0)));
            assert_eq!(m.cell(LayerMetric::ReportedUnl, *slot), Some(&Cell::Number(0.0)));
            assert_eq!(m.cell(LayerMetric::Description, *slot), Some(&Cell::Empty));
        }
        assert_eq!(
            m.cell(LayerMetric::Description, LayerSlot::Layer1),
            Some(&Cell::Text(DEFAULT_DESCRIPTION.to_string()))
        );

        assert_eq!(m.cell(LayerMetric::Attachment, LayerSlot::Inuring3), Some(&Cell::Number(0.0)));
    }

    #[test]
    fn test_default_matrix_totals() {
        let m = LayerMatrix::with_defaults(2023, "USD", 1000.0);
        assert!(m.totals_are_current());
        assert_relative_eq!(m.total(LayerMetric::SelectedUnl).unwrap(), 1000.0);
        assert_relative_eq!(m.total(LayerMetric::UnderwritingYear).unwrap(), 2023.0 * 11.0);
        assert_relative_eq!(m.total(LayerMetric::Placed).unwrap(), 0.0);
        assert_eq!(m.total(LayerMetric::Description), None);
        assert_eq!(m.total(LayerMetric::Currency), None);
    }

    #[test]
    fn test_totals_sum_slots_ignoring_non_numeric() {
        let mut m = LayerMatrix::zeroed();
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer1, 100.0);
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer2, "250");
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer3, "n/a");
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer4, Cell::Empty);
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Inuring3, 50.0);

        let totals = m.compute_totals();
        assert_relative_eq!(totals.total(LayerMetric::ContractLimit).unwrap(), 400.0);

        // Cells are copied unchanged, text stays text
        assert_eq!(
            totals.cell(LayerMetric::ContractLimit, LayerSlot::Layer3),
            Some(&Cell::Text("n/a".to_string()))
        );
    }

    #[test]
    fn test_label_rows_never_total() {
        let mut m = LayerMatrix::zeroed();
        for slot in LAYER_SLOTS {
            m.set_cell(LayerMetric::Description, slot, 5.0);
            m.set_cell(LayerMetric::Currency, slot, "7");
        }

        let totals = m.compute_totals();
        assert_eq!(totals.total(LayerMetric::Description), None);
        assert_eq!(totals.total(LayerMetric::Currency), None);
    }

    #[test]
    fn test_overflowing_total_saturates() {
        let mut m = LayerMatrix::zeroed();
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer1, 1e308);
        m.set_cell(LayerMetric::ContractLimit, LayerSlot::Layer2, 1e308);
        m.set_cell(LayerMetric::Attachment, LayerSlot::Layer1, -1e308);
        m.set_cell(LayerMetric::Attachment, LayerSlot::Layer2, "-1e308");

        let totals = m.compute_totals();
        assert_eq!(totals.total(LayerMetric::ContractLimit), Some(f64::MAX));
        assert_eq!(totals.total(LayerMetric::Attachment), Some(-f64::MAX));
        assert!(totals.totals_are_current());

        let json = serde_json::to_value(&totals).unwrap();
        let limit_row = &json["rows"][LayerMetric::ContractLimit as usize];
        assert_eq!(limit_row["metric"], "Contract Limit");
        assert!(limit_row["total"].is_f64());
    }

    #[test]
    fn test_stale_total_overwritten() {
        let mut rows = LayerMatrix::zeroed().rows().to_vec();
        rows[3].total = Some(999.0);
        rows[0].total = Some(1.0);
        let m = LayerMatrix::from_rows(rows);
        assert!(!m.totals_are_current());

        let totals = m.compute_totals();
        assert_eq!(totals.total(LayerMetric::Placed), Some(0.0));
        assert_eq!(totals.total(LayerMetric::Description), None);
    }

    #[test]
    fn test_compute_totals_idempotent_and_pure() {
        let mut m = LayerMatrix::with_defaults(2018, "USD", 234_000.0);
        m.set_cell(LayerMetric::Attachment, LayerSlot::Layer2, "10000");
        m.set_cell(LayerMetric::SharePct, LayerSlot::Inuring1, "abc");
        m.set_cell(LayerMetric::RateOnLine, LayerSlot::Layer5, 0.125);
        let before = m.clone();

        let once = m.compute_totals();
        let twice = once.compute_totals();
        assert_eq!(once, twice);
        assert_eq!(m, before);
    }

    #[test]
    fn test_check_metrics() {
        let mut rows = LayerMatrix::zeroed().rows().to_vec();
        rows.swap(1, 2);
        let err = LayerMatrix::from_rows(rows).check_metrics().unwrap_err();
        assert!(matches!(err, ReservingError::LayerMetricMismatch { row: 1, .. }));

        let mut rows = LayerMatrix::zeroed().rows().to_vec();
        rows.pop();
        let err = LayerMatrix::from_rows(rows).check_metrics().unwrap_err();
        assert!(matches!(err, ReservingError::LayerMetricMismatch { row: 19, found: None, .. }));
    }

    #[test]
    fn test_json_shape() {
        let m = LayerMatrix::with_defaults(2018, "USD", 10.0);
        let json = serde_json::to_value(&m).unwrap();

        let description = &json["rows"][0];
        assert_eq!(description["metric"], "Description");
        assert_eq!(description["cells"][0], DEFAULT_DESCRIPTION);
        assert!(description["cells"][1].is_null());
        assert!(description["total"].is_null());

        let back: LayerMatrix = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }
}
