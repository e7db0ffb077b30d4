//! Serializable dashboard state handed to presentation layers

use crate::event::Event;
use crate::lawf::LawfSeries;
use crate::layer::LayerMatrix;
use crate::program::{Program, ProgramSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of the event picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOption {
    pub id: u32,
    pub label: String,
}

/// Everything a dashboard needs to render one interaction's result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Current event context (top bar)
    pub event: Event,
    pub event_label: String,
    pub events: Vec<EventOption>,

    /// Program grid
    pub programs: Vec<Program>,
    pub program_summary: ProgramSummary,

    /// Layer detail panel for the selected program
    pub selected_program_id: Option<u32>,
    pub layer_matrix: Option<LayerMatrix>,

    /// Chart panel; placeholder curve
    pub lawf: Option<LawfSeries>,

    #[serde(default)]
    pub last_saved_at: Option<DateTime<Utc>>,
}
