//! Program records, the per-event program table and CSV loading

mod data;
mod table;
pub mod loader;

pub use data::{Program, DEFAULT_CURRENCY};
pub use table::{ProgramTable, ProgramSummary};
pub use loader::{load_programs, load_programs_from_reader};
