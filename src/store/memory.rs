//! In-memory store, seeded from the built-in sample or a CSV data directory

use super::sample::{sample_event, sample_programs};
use super::ReservingStore;
use crate::error::ReservingError;
use crate::event::{load_events, Event};
use crate::program::{load_programs, ProgramTable};
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

/// Events file inside a data directory
pub const EVENTS_FILE: &str = "events.csv";

/// Programs file inside a data directory
pub const PROGRAMS_FILE: &str = "programs.csv";

/// Events and program tables held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    events: Vec<Event>,
    programs: BTreeMap<u32, ProgramTable>,
    source: String,
}

impl InMemoryStore {
    /// Create a store from already-loaded data
    ///
    /// Program tables for unknown event ids are kept but never reached.
    pub fn new(events: Vec<Event>, programs: BTreeMap<u32, ProgramTable>) -> Self {
        Self {
            events,
            programs,
            source: "the in-memory store".to_string(),
        }
    }

    /// The built-in seed event with its eight programs
    pub fn sample() -> Self {
        let event = sample_event();
        let mut programs = BTreeMap::new();
        programs.insert(event.id, sample_programs());
        Self {
            events: vec![event],
            programs,
            source: "the built-in sample".to_string(),
        }
    }

    /// Load events.csv and programs.csv from a data directory
    ///
    /// A missing programs.csv means no event has programs yet; a missing
    /// events.csv is an error.
    pub fn from_csv_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ReservingError> {
        let dir = dir.as_ref();
        let events = load_events(dir.join(EVENTS_FILE))?;

        let programs_path = dir.join(PROGRAMS_FILE);
        let programs = if programs_path.exists() {
            load_programs(&programs_path)?
        } else {
            BTreeMap::new()
        };

        info!(
            "Loaded {} events and {} programs from {}",
            events.len(),
            programs.values().map(|t| t.len()).sum::<usize>(),
            dir.display()
        );

        Ok(Self {
            events,
            programs,
            source: dir.join(EVENTS_FILE).display().to_string(),
        })
    }
}

impl ReservingStore for InMemoryStore {
    fn events(&self) -> Result<Vec<Event>, ReservingError> {
        Ok(self.events.clone())
    }

    fn programs(&self, event_id: u32) -> Result<ProgramTable, ReservingError> {
        if !self.events.iter().any(|e| e.id == event_id) {
            return Err(ReservingError::UnknownEvent(event_id));
        }
        Ok(self.programs.get(&event_id).cloned().unwrap_or_default())
    }

    fn describe(&self) -> String {
        self.source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_DATA_PATH;

    #[test]
    fn test_sample_store() {
        let store = InMemoryStore::sample();
        let events = store.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name, "Michael");
        assert_eq!(store.programs(1).unwrap().len(), 8);
        assert!(matches!(store.programs(42), Err(ReservingError::UnknownEvent(42))));
    }

    #[test]
    fn test_event_without_programs() {
        let events = vec![Event::new(3, "Ida", 2021, 2021, 1.0, "ARL")];
        let store = InMemoryStore::new(events, BTreeMap::new());
        assert!(store.programs(3).unwrap().is_empty());
    }

    #[test]
    fn test_csv_dir_store() {
        let store = InMemoryStore::from_csv_dir(DEFAULT_DATA_PATH).expect("Failed to load data dir");
        assert_eq!(store.events().unwrap(), vec![sample_event()]);
        assert_eq!(store.programs(1).unwrap(), sample_programs());
        assert!(store.describe().ends_with(EVENTS_FILE));
    }

    #[test]
    fn test_missing_data_dir() {
        let result = InMemoryStore::from_csv_dir("no/such/dir");
        assert!(result.is_err());
    }
}
