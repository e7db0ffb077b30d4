//! Per-(event, program) layer matrix repository
//!
//! A matrix is created the first time a program is selected, from the event's
//! accident year and the program's currency and selected UNL. Later lookups
//! return the stored matrix unchanged, edits included.

use super::matrix::LayerMatrix;
use crate::event::Event;
use crate::program::Program;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Key of a stored layer matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerKey {
    pub event_id: u32,
    pub program_id: u32,
}

impl LayerKey {
    pub fn new(event_id: u32, program_id: u32) -> Self {
        Self { event_id, program_id }
    }
}

/// A stored matrix together with its key, for snapshots and listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLayer {
    pub event_id: u32,
    pub program_id: u32,
    pub matrix: LayerMatrix,
}

/// Lazily populated map of layer matrices
#[derive(Debug, Clone, Default)]
pub struct LayerRepository {
    entries: HashMap<LayerKey, LayerMatrix>,

    /// Statistics
    pub created: u64,
    pub reused: u64,
}

impl LayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored matrix for the program, creating the default one on first access
    pub fn get_or_create(&mut self, event: &Event, program: &Program) -> &LayerMatrix {
        let key = LayerKey::new(event.id, program.id);

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.reused += 1;
                debug!("Reusing layer matrix for event {} program {}", key.event_id, key.program_id);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.created += 1;
                debug!(
                    "Creating default layer matrix for event {} program {} (AY {}, {}, selected UNL {})",
                    key.event_id,
                    key.program_id,
                    event.accident_year,
                    program.currency,
                    program.selected_unl_or_zero()
                );
                entry.insert(LayerMatrix::with_defaults(
                    event.accident_year,
                    &program.currency,
                    program.selected_unl_or_zero(),
                ))
            }
        }
    }

    pub fn get(&self, event_id: u32, program_id: u32) -> Option<&LayerMatrix> {
        self.entries.get(&LayerKey::new(event_id, program_id))
    }

    pub fn contains(&self, event_id: u32, program_id: u32) -> bool {
        self.entries.contains_key(&LayerKey::new(event_id, program_id))
    }

    /// Store an edited matrix, re-deriving its totals first
    pub fn replace(&mut self, event_id: u32, program_id: u32, matrix: LayerMatrix) -> &LayerMatrix {
        let key = LayerKey::new(event_id, program_id);
        let matrix = matrix.compute_totals();
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(matrix);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(matrix),
        }
    }

    /// All stored matrices ordered by (event, program)
    pub fn stored(&self) -> Vec<StoredLayer> {
        let mut keys: Vec<&LayerKey> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| StoredLayer {
                event_id: key.event_id,
                program_id: key.program_id,
                matrix: self.entries[key].clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{Cell, LayerMetric, LayerSlot};

    fn michael() -> Event {
        Event::new(1, "Michael", 2018, 2018, 1000.0, "ARL")
    }

    fn program(id: u32, selected_unl: f64) -> Program {
        let mut p = Program::blank(id, "USD");
        p.selected_unl = Some(selected_unl);
        p
    }

    #[test]
    fn test_first_access_creates_default() {
        let mut repo = LayerRepository::new();
        let event = michael();

        let m = repo.get_or_create(&event, &program(2, 234_000.0)).clone();
        assert_eq!(m.cell(LayerMetric::SelectedUnl, LayerSlot::Layer1), Some(&Cell::Number(234_000.0)));
        assert_eq!(m.cell(LayerMetric::UnderwritingYear, LayerSlot::Layer4), Some(&Cell::Number(2018.0)));
        assert_eq!(repo.created, 1);
        assert_eq!(repo.reused, 0);
    }

    #[test]
    fn test_each_program_gets_its_own_matrix() {
        let mut repo = LayerRepository::new();
        let event = michael();

        let first = repo.get_or_create(&event, &program(1, 24_261.0)).clone();
        let second = repo.get_or_create(&event, &program(2, 234_000.0)).clone();

        assert_ne!(first, second);
        assert_eq!(repo.len(), 2);
        assert_eq!(second.total(LayerMetric::SelectedUnl), Some(234_000.0));
    }

    #[test]
    fn test_second_access_keeps_edits() {
        let mut repo = LayerRepository::new();
        let event = michael();
        let p2 = program(2, 234_000.0);

        let mut edited = repo.get_or_create(&event, &p2).clone();
        edited.set_cell(LayerMetric::Attachment, LayerSlot::Layer1, 50_000.0);
        repo.replace(event.id, p2.id, edited);

        // Program figures moving afterwards must not re-initialise the matrix
        let moved = program(2, 1.0);
        let again = repo.get_or_create(&event, &moved);
        assert_eq!(again.total(LayerMetric::Attachment), Some(50_000.0));
        assert_eq!(again.total(LayerMetric::SelectedUnl), Some(234_000.0));
        assert_eq!(repo.created, 1);
        assert_eq!(repo.reused, 1);
    }

    #[test]
    fn test_replace_recomputes_totals() {
        let mut repo = LayerRepository::new();
        let mut m = LayerMatrix::zeroed();
        m.set_cell(LayerMetric::NetLayerLoss, LayerSlot::Layer3, "12.5");

        let stored = repo.replace(1, 9, m);
        assert_eq!(stored.total(LayerMetric::NetLayerLoss), Some(12.5));
        assert!(repo.contains(1, 9));
        assert!(!repo.contains(2, 9));
    }

    #[test]
    fn test_same_program_id_in_two_events() {
        let mut repo = LayerRepository::new();
        let michael = michael();
        let ian = Event::new(2, "Ian", 2022, 2022, 1000.0, "ARL");

        repo.get_or_create(&michael, &program(1, 10.0));
        repo.get_or_create(&ian, &program(1, 10.0));

        assert_eq!(repo.len(), 2);
        assert_eq!(
            repo.get(2, 1).unwrap().cell(LayerMetric::UnderwritingYear, LayerSlot::Layer1),
            Some(&Cell::Number(2022.0))
        );

        let stored = repo.stored();
        assert_eq!(stored[0].event_id, 1);
        assert_eq!(stored[1].event_id, 2);
    }
}
