//! Reserving System - data-entry core for an actuarial reserving dashboard
//!
//! This library provides:
//! - Event context, reinsurance program and layer matrix data model
//! - Layer matrix totals and default construction
//! - An illustrative (placeholder) LAWF loss development series
//! - A read-only event/program store with CSV loading
//! - A single-user session tying it together, rendered as a serializable view

pub mod error;
pub mod config;
pub mod event;
pub mod program;
pub mod layer;
pub mod lawf;
pub mod store;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use error::ReservingError;
pub use config::SessionConfig;
pub use event::{Event, EventContextEdit};
pub use program::{Program, ProgramTable, ProgramSummary};
pub use layer::{Cell, LayerMatrix, LayerMetric, LayerRepository, LayerSlot};
pub use lawf::{LawfParams, LawfSeries};
pub use store::{InMemoryStore, ReservingStore};
pub use session::{Session, SessionSnapshot};
pub use view::DashboardView;
