//! Layer matrix CSV export / import
//!
//! Layout matches the layer detail grid: `Metric, Layer 1..Layer 8,
//! Inuring 1..Inuring 3, Total`. On import the Total column is ignored and
//! re-derived.

use super::matrix::{Cell, LayerMatrix, LayerRow};
use super::metric::{LayerMetric, LAYER_SLOTS, METRIC_COLUMN, SLOT_COUNT, TOTAL_COLUMN};
use crate::error::ReservingError;
use std::io::{Read, Write};

/// Header row of a layer matrix CSV
pub fn csv_header() -> Vec<&'static str> {
    let mut header = Vec::with_capacity(SLOT_COUNT + 2);
    header.push(METRIC_COLUMN);
    header.extend(LAYER_SLOTS.iter().map(|s| s.as_str()));
    header.push(TOTAL_COLUMN);
    header
}

/// Write the matrix (with its current totals) as CSV
pub fn write_layer_csv<W: Write>(matrix: &LayerMatrix, writer: W) -> Result<(), ReservingError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(csv_header())?;

    for row in matrix.rows() {
        let mut record = Vec::with_capacity(SLOT_COUNT + 2);
        record.push(row.metric.as_str().to_string());
        record.extend(row.cells.iter().map(|c| c.to_string()));
        record.push(row.total.map(|t| t.to_string()).unwrap_or_default());
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Read an edited matrix from CSV and re-derive its totals
///
/// Columns are matched by header, so their order does not matter. Missing
/// slot columns read as empty cells. Rows must name known metrics.
pub fn read_layer_csv<R: Read>(reader: R) -> Result<LayerMatrix, ReservingError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let metric_col = headers
        .iter()
        .position(|h| h.trim() == METRIC_COLUMN)
        .ok_or_else(|| ReservingError::InvalidRecord(format!("missing {} column", METRIC_COLUMN)))?;
    let slot_cols: Vec<Option<usize>> = LAYER_SLOTS
        .iter()
        .map(|slot| headers.iter().position(|h| h.trim() == slot.as_str()))
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let metric: LayerMetric = record
            .get(metric_col)
            .unwrap_or_default()
            .parse()
            .map_err(ReservingError::InvalidRecord)?;

        let cells: [Cell; SLOT_COUNT] = std::array::from_fn(|i| {
            slot_cols[i]
                .and_then(|col| record.get(col))
                .map(Cell::parse)
                .unwrap_or_default()
        });

        rows.push(LayerRow { metric, cells, total: None });
    }

    Ok(LayerMatrix::from_rows(rows).compute_totals())
}
