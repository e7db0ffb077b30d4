//! Error type shared by the store, the program table and the session

use thiserror::Error;

/// Errors raised while loading or editing reserving data
///
/// The pure computations (totals, default layer matrix, LAWF series) never
/// return these; malformed numeric input there degrades to zero.
#[derive(Error, Debug)]
pub enum ReservingError {
    /// No event records are available, so there is nothing to reserve against
    #[error("No events found. Seed {hint} with at least one event before opening a session")]
    NoEvents { hint: String },

    #[error("Unknown event id: {0}")]
    UnknownEvent(u32),

    #[error("Unknown program id {program_id} in event {event_id}")]
    UnknownProgram { event_id: u32, program_id: u32 },

    #[error("Duplicate program id: {0}")]
    DuplicateProgramId(u32),

    /// The largest program id is already `u32::MAX`
    #[error("No program id left to assign: the table already holds id {}", u32::MAX)]
    ProgramIdsExhausted,

    /// Edited program table does not carry the same id sequence as the stored one
    #[error("Program ids cannot change: row {row} expected {expected:?}, found {found:?}")]
    ProgramIdMismatch {
        row: usize,
        expected: Option<u32>,
        found: Option<u32>,
    },

    /// Edited layer matrix does not carry the standard metric rows in order
    #[error("Layer matrix metric rows do not match: row {row} expected {expected:?}, found {found:?}")]
    LayerMetricMismatch {
        row: usize,
        expected: Option<String>,
        found: Option<String>,
    },

    #[error("No program is selected")]
    NoProgramSelected,

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
