//! Load events from events.csv

use super::Event;
use crate::error::ReservingError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching events.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "EventID")]
    id: u32,
    #[serde(rename = "Event")]
    event_name: String,
    #[serde(rename = "AccidentYear")]
    accident_year: i32,
    #[serde(rename = "Period")]
    period: i32,
    #[serde(rename = "Unit")]
    unit: f64,
    #[serde(rename = "LE")]
    le_code: Option<String>,
}

impl CsvRow {
    fn to_event(self) -> Result<Event, ReservingError> {
        if self.event_name.trim().is_empty() {
            return Err(ReservingError::InvalidRecord(format!(
                "event {} has no name",
                self.id
            )));
        }

        Ok(Event {
            id: self.id,
            event_name: self.event_name,
            accident_year: self.accident_year,
            period: self.period,
            unit: self.unit,
            le_code: self.le_code.unwrap_or_default(),
        })
    }
}

/// Load all events from a CSV file, in file order
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, ReservingError> {
    let reader = Reader::from_path(path)?;
    collect_events(reader)
}

/// Load events from any reader (e.g., string buffer, request body)
pub fn load_events_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Event>, ReservingError> {
    collect_events(Reader::from_reader(reader))
}

fn collect_events<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Event>, ReservingError> {
    let mut events = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        events.push(row.to_event()?);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_events_from_reader() {
        let data = "EventID,Event,AccidentYear,Period,Unit,LE\n\
                    1,Michael,2018,2018,1000,ARL\n\
                    2,Ian,2022,2023,1000,\n";
        let events = load_events_from_reader(data.as_bytes()).expect("Failed to load events");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "Michael");
        assert_eq!(events[0].le_code, "ARL");
        assert_eq!(events[1].accident_year, 2022);
        assert_eq!(events[1].period, 2023);
        assert_eq!(events[1].le_code, "");
    }

    #[test]
    fn test_blank_event_name_rejected() {
        let data = "EventID,Event,AccidentYear,Period,Unit,LE\n3, ,2020,2020,1,ARL\n";
        let result = load_events_from_reader(data.as_bytes());
        assert!(matches!(result, Err(ReservingError::InvalidRecord(_))));
    }

    #[test]
    fn test_load_shipped_events() {
        let events = load_events("data/events.csv").expect("Failed to load events");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].label(), "Michael (2018)");
    }
}
