//! Event records: the reserving scenario programs are grouped under

mod data;
pub mod loader;

pub use data::{Event, EventContextEdit};
pub use loader::{load_events, load_events_from_reader};
