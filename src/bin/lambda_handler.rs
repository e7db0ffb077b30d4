//! AWS Lambda handler for the dashboard
//!
//! Each invocation is one interaction: the request carries the state (or
//! falls back to the built-in sample) plus the user's edits, and the response
//! is the re-rendered dashboard view. Nothing is kept between invocations.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use reserving_system::{
    DashboardView, Event, EventContextEdit, InMemoryStore, LayerMatrix, LawfParams, ProgramTable,
    ReservingError, Session, SessionConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input for one interaction
#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    /// Events to work on; the built-in sample is used when absent
    #[serde(default)]
    pub events: Option<Vec<Event>>,

    /// Program tables keyed by event id (only read when `events` is given)
    #[serde(default)]
    pub programs: BTreeMap<u32, ProgramTable>,

    /// Event to open (defaults to the first event)
    #[serde(default)]
    pub event_id: Option<u32>,

    /// Top-bar edits
    #[serde(default)]
    pub event_edit: EventContextEdit,

    /// Whole program grid after the user's edits
    #[serde(default)]
    pub program_edits: Option<ProgramTable>,

    /// Press "Add Program" before selecting
    #[serde(default)]
    pub add_program: bool,

    /// Program to select (defaults to the first program)
    #[serde(default)]
    pub selected_program_id: Option<u32>,

    /// Whole layer grid of the selected program after the user's edits
    #[serde(default)]
    pub layer_matrix: Option<LayerMatrix>,

    /// Placeholder curve overrides
    #[serde(default)]
    pub lawf: Option<LawfParams>,

    /// Press "Save"
    #[serde(default)]
    pub save: bool,
}

/// Output for one interaction
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<DashboardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_program_id: Option<u32>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Replay one interaction against a fresh session
fn process(request: DashboardRequest) -> Result<(DashboardView, Option<u32>), ReservingError> {
    let store = match request.events {
        Some(events) => InMemoryStore::new(events, request.programs),
        None => InMemoryStore::sample(),
    };

    let config = SessionConfig {
        event_id: request.event_id,
        lawf: request.lawf.unwrap_or_default(),
        ..Default::default()
    };
    let mut session = Session::open(store, config)?;

    session.update_event(&request.event_edit);

    if let Some(edited) = request.program_edits {
        session.replace_programs(edited)?;
    }

    let added_program_id = if request.add_program {
        Some(session.add_program()?)
    } else {
        None
    };

    if let Some(program_id) = request.selected_program_id {
        session.select_program(program_id)?;
    }

    if let Some(edited) = request.layer_matrix {
        session.replace_layer_matrix(edited)?;
    }

    if request.save {
        session.save();
    }

    Ok((session.view(), added_program_id))
}

/// Lambda handler function
async fn handler(event: LambdaEvent<DashboardRequest>) -> Result<DashboardResponse, Error> {
    let start = std::time::Instant::now();
    let (request, _context) = event.into_parts();

    let response = match process(request) {
        Ok((view, added_program_id)) => DashboardResponse {
            view: Some(view),
            added_program_id,
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => {
            log::warn!("Dashboard request failed: {}", e);
            DashboardResponse {
                view: None,
                added_program_id: None,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            }
        }
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
