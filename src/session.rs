//! Dashboard session: the explicit application state behind every interaction
//!
//! A session owns the current event context, the program tables and the layer
//! repository. Each user action is one method call; the pure computations
//! (totals, default matrix, LAWF series) never touch session state directly.

use crate::config::SessionConfig;
use crate::error::ReservingError;
use crate::event::{Event, EventContextEdit};
use crate::lawf::LawfSeries;
use crate::layer::{LayerMatrix, LayerRepository, StoredLayer};
use crate::program::{Program, ProgramTable};
use crate::store::ReservingStore;
use crate::view::{DashboardView, EventOption};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State captured by "Save"
///
/// Nothing is written anywhere yet; the snapshot is kept in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub saved_at: DateTime<Utc>,
    pub event: Event,
    pub programs: ProgramTable,
    pub layers: Vec<StoredLayer>,
}

/// Single-user dashboard session over a store
#[derive(Debug)]
pub struct Session<S: ReservingStore> {
    store: S,
    config: SessionConfig,

    /// Events with top-bar edits applied; never empty
    events: Vec<Event>,
    event_index: usize,

    /// Programs of the current event
    programs: ProgramTable,
    /// Programs of events visited earlier, kept so edits survive a switch
    parked_programs: BTreeMap<u32, ProgramTable>,

    selected_program_id: Option<u32>,
    layers: LayerRepository,
    last_saved: Option<SessionSnapshot>,
}

impl<S: ReservingStore> Session<S> {
    /// Open a session on the configured (or first) event
    ///
    /// Fails fast when the store has no events: no default event is made up.
    pub fn open(store: S, config: SessionConfig) -> Result<Self, ReservingError> {
        let events = store.events()?;
        if events.is_empty() {
            return Err(ReservingError::NoEvents { hint: store.describe() });
        }

        let event_index = match config.event_id {
            Some(id) => events
                .iter()
                .position(|e| e.id == id)
                .ok_or(ReservingError::UnknownEvent(id))?,
            None => 0,
        };
        let programs = store.programs(events[event_index].id)?;

        let mut session = Self {
            store,
            config,
            events,
            event_index,
            programs,
            parked_programs: BTreeMap::new(),
            selected_program_id: None,
            layers: LayerRepository::new(),
            last_saved: None,
        };
        session.select_first_program();

        info!(
            "Opened session on {} with {} programs",
            session.event().label(),
            session.programs.len()
        );
        Ok(session)
    }

    fn select_first_program(&mut self) {
        self.selected_program_id = self.programs.first().map(|p| p.id);
        if let Some(program) = self.programs.first() {
            self.layers.get_or_create(&self.events[self.event_index], program);
        }
    }

    // ---- Event context ----

    /// Current event context
    pub fn event(&self) -> &Event {
        &self.events[self.event_index]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Switch to another event; its programs load from the store on first visit
    pub fn select_event(&mut self, event_id: u32) -> Result<(), ReservingError> {
        if self.event().id == event_id {
            return Ok(());
        }

        let index = self
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or(ReservingError::UnknownEvent(event_id))?;

        let incoming = match self.parked_programs.remove(&event_id) {
            Some(table) => table,
            None => self.store.programs(event_id)?,
        };

        let outgoing_id = self.event().id;
        let outgoing = std::mem::replace(&mut self.programs, incoming);
        self.parked_programs.insert(outgoing_id, outgoing);
        self.event_index = index;
        self.select_first_program();

        info!("Switched to event {}", self.event().label());
        Ok(())
    }

    /// Apply top-bar edits to the current event
    ///
    /// Existing layer matrices keep the accident year they were created with.
    pub fn update_event(&mut self, edit: &EventContextEdit) -> &Event {
        if !edit.is_empty() {
            let edited = self.events[self.event_index].with_edit(edit);
            info!("Event {} context updated: {:?}", edited.id, edit);
            self.events[self.event_index] = edited;
        }
        self.event()
    }

    // ---- Programs ----

    pub fn programs(&self) -> &ProgramTable {
        &self.programs
    }

    /// Whole-table replacement from the program grid
    ///
    /// Rejected (and nothing changed) when ids differ from the stored table.
    pub fn replace_programs(&mut self, edited: ProgramTable) -> Result<&ProgramTable, ReservingError> {
        if let Err(e) = self.programs.replace(edited) {
            warn!("Rejected program grid edit: {}", e);
            return Err(e);
        }
        Ok(&self.programs)
    }

    /// "Add Program": append a blank program and return its id
    pub fn add_program(&mut self) -> Result<u32, ReservingError> {
        let id = self.programs.add_program(&self.config.default_currency)?;
        info!("Added program {} to event {}", id, self.event().id);
        Ok(id)
    }

    pub fn selected_program_id(&self) -> Option<u32> {
        self.selected_program_id
    }

    pub fn selected_program(&self) -> Option<&Program> {
        self.selected_program_id.and_then(|id| self.programs.get(id))
    }

    /// Select a program, creating its layer matrix on first selection
    pub fn select_program(&mut self, program_id: u32) -> Result<&LayerMatrix, ReservingError> {
        let event = &self.events[self.event_index];
        let program = self.programs.get(program_id).ok_or(ReservingError::UnknownProgram {
            event_id: event.id,
            program_id,
        })?;

        self.selected_program_id = Some(program_id);
        Ok(self.layers.get_or_create(event, program))
    }

    // ---- Layer detail ----

    /// Layer matrix of the selected program
    pub fn layer_matrix(&self) -> Option<&LayerMatrix> {
        let program_id = self.selected_program_id?;
        self.layers.get(self.event().id, program_id)
    }

    /// Whole-table replacement from the layer grid; totals are re-derived
    pub fn replace_layer_matrix(&mut self, edited: LayerMatrix) -> Result<&LayerMatrix, ReservingError> {
        let program_id = self.selected_program_id.ok_or(ReservingError::NoProgramSelected)?;
        if let Err(e) = edited.check_metrics() {
            warn!("Rejected layer grid edit for program {}: {}", program_id, e);
            return Err(e);
        }
        let event_id = self.event().id;
        Ok(self.layers.replace(event_id, program_id, edited))
    }

    pub fn layers(&self) -> &LayerRepository {
        &self.layers
    }

    // ---- Chart ----

    /// Placeholder LAWF series for the selected program
    pub fn lawf_series(&self) -> Option<LawfSeries> {
        self.selected_program()
            .map(|p| LawfSeries::for_program(p, &self.config.lawf))
    }

    // ---- Save ----

    /// Capture the current event, its programs and their layer matrices
    ///
    /// Matrices of other events stay in the session but are not part of the
    /// snapshot.
    pub fn save(&mut self) -> &SessionSnapshot {
        let event = self.event().clone();
        let layers = self
            .layers
            .stored()
            .into_iter()
            .filter(|l| l.event_id == event.id)
            .collect();
        let snapshot = SessionSnapshot {
            saved_at: Utc::now(),
            event,
            programs: self.programs.clone(),
            layers,
        };
        info!(
            "Saved (in-session) event {} with {} programs and {} layer matrices; not persisted",
            snapshot.event.id,
            snapshot.programs.len(),
            snapshot.layers.len()
        );
        self.last_saved.insert(snapshot)
    }

    pub fn last_saved(&self) -> Option<&SessionSnapshot> {
        self.last_saved.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Render the current state for a presentation layer
    pub fn view(&self) -> DashboardView {
        let event = self.event().clone();
        DashboardView {
            event_label: event.label(),
            events: self
                .events
                .iter()
                .map(|e| EventOption { id: e.id, label: e.label() })
                .collect(),
            event,
            programs: self.programs.as_slice().to_vec(),
            program_summary: self.programs.summary(),
            selected_program_id: self.selected_program_id,
            layer_matrix: self.layer_matrix().cloned(),
            lawf: self.lawf_series(),
            last_saved_at: self.last_saved.as_ref().map(|s| s.saved_at),
        }
    }
}
