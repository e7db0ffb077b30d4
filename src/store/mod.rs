//! Event / program store consumed by the session
//!
//! The store is read-only: there is no write-back path, edits live in the
//! session until a real persistence layer exists.

mod memory;
mod sample;

pub use memory::{InMemoryStore, EVENTS_FILE, PROGRAMS_FILE};
pub use sample::{sample_event, sample_programs};

use crate::error::ReservingError;
use crate::event::Event;
use crate::program::ProgramTable;

/// Default directory holding events.csv and programs.csv
pub const DEFAULT_DATA_PATH: &str = "data";

/// Source of events and their program tables
pub trait ReservingStore {
    /// All events, in display order
    fn events(&self) -> Result<Vec<Event>, ReservingError>;

    /// Program table for an event (empty when the event has no programs)
    fn programs(&self, event_id: u32) -> Result<ProgramTable, ReservingError>;

    /// Where the events come from, used in guidance messages
    fn describe(&self) -> String {
        "the event store".to_string()
    }
}
