//! Load programs from programs.csv
//!
//! The file carries every event's programs; an `EventID` column assigns each
//! row to its event. The remaining columns use the program grid headers.

use super::{Program, ProgramTable};
use crate::error::ReservingError;
use csv::Reader;
use std::collections::BTreeMap;
use std::path::Path;

/// Column holding the owning event id
pub const EVENT_ID_COLUMN: &str = "EventID";

/// Load all programs from a CSV file, grouped by event id in file order
pub fn load_programs<P: AsRef<Path>>(path: P) -> Result<BTreeMap<u32, ProgramTable>, ReservingError> {
    let reader = Reader::from_path(path)?;
    collect_programs(reader)
}

/// Load programs from any reader (e.g., string buffer, request body)
pub fn load_programs_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<BTreeMap<u32, ProgramTable>, ReservingError> {
    collect_programs(Reader::from_reader(reader))
}

fn collect_programs<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<BTreeMap<u32, ProgramTable>, ReservingError> {
    let headers = reader.headers()?.clone();
    let event_col = headers
        .iter()
        .position(|h| h == EVENT_ID_COLUMN)
        .ok_or_else(|| ReservingError::InvalidRecord(format!("missing {} column", EVENT_ID_COLUMN)))?;

    let mut grouped: BTreeMap<u32, Vec<Program>> = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let event_id: u32 = record[event_col].trim().parse().map_err(|_| {
            ReservingError::InvalidRecord(format!("bad {}: {:?}", EVENT_ID_COLUMN, &record[event_col]))
        })?;
        let program: Program = record.deserialize(Some(&headers))?;
        grouped.entry(event_id).or_default().push(program);
    }

    grouped
        .into_iter()
        .map(|(event_id, programs)| Ok((event_id, ProgramTable::new(programs)?)))
        .collect()
}
