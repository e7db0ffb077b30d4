//! Layer matrices: treaty terms per layer slot for one program
//!
//! - `metric`: row (metric) and column (layer slot) labels
//! - `matrix`: the matrix itself, default construction and totals
//! - `repository`: lazily created matrices keyed by (event, program)
//! - `csv_io`: grid-shaped CSV export and import

mod metric;
mod matrix;
mod repository;
pub mod csv_io;

pub use metric::{
    LayerMetric, LayerSlot, LAYER_METRICS, LAYER_SLOTS, METRIC_COLUMN, SLOT_COUNT, TOTAL_COLUMN,
};
pub use matrix::{Cell, LayerMatrix, LayerRow, DEFAULT_DESCRIPTION};
pub use repository::{LayerKey, LayerRepository, StoredLayer};
pub use csv_io::{read_layer_csv, write_layer_csv};
