//! Event context data structures

use serde::{Deserialize, Serialize};

/// A catastrophe / accident-year scenario grouping reinsurance programs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier, never edited
    pub id: u32,

    /// Event name (e.g. "Michael")
    pub event_name: String,

    /// Accident year the losses are attributed to
    pub accident_year: i32,

    /// Reporting period
    pub period: i32,

    /// Monetary scale factor (1000 = figures in thousands)
    pub unit: f64,

    /// Legal-entity code
    #[serde(default)]
    pub le_code: String,
}

impl Event {
    /// Create a new event
    pub fn new(
        id: u32,
        event_name: impl Into<String>,
        accident_year: i32,
        period: i32,
        unit: f64,
        le_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            event_name: event_name.into(),
            accident_year,
            period,
            unit,
            le_code: le_code.into(),
        }
    }

    /// Label used by event pickers: "Michael (2018)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.event_name, self.accident_year)
    }

    /// Apply a top-bar edit, returning the edited event
    ///
    /// Fields left as `None` keep their current value. The id is not editable.
    pub fn with_edit(&self, edit: &EventContextEdit) -> Self {
        Self {
            id: self.id,
            event_name: edit.event_name.clone().unwrap_or_else(|| self.event_name.clone()),
            accident_year: edit.accident_year.unwrap_or(self.accident_year),
            period: edit.period.unwrap_or(self.period),
            unit: edit.unit.unwrap_or(self.unit),
            le_code: edit.le_code.clone().unwrap_or_else(|| self.le_code.clone()),
        }
    }
}

/// Edits made through the top controls bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventContextEdit {
    #[serde(default)]
    pub accident_year: Option<i32>,
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default)]
    pub unit: Option<f64>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub le_code: Option<String>,
}

impl EventContextEdit {
    /// True when the edit changes nothing
    pub fn is_empty(&self) -> bool {
        self.accident_year.is_none()
            && self.period.is_none()
            && self.unit.is_none()
            && self.event_name.is_none()
            && self.le_code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_label() {
        let event = Event::new(1, "Michael", 2018, 2018, 1000.0, "ARL");
        assert_eq!(event.label(), "Michael (2018)");
    }

    #[test]
    fn test_edit_keeps_id_and_unset_fields() {
        let event = Event::new(7, "Michael", 2018, 2018, 1000.0, "ARL");
        let edit = EventContextEdit {
            accident_year: Some(2019),
            le_code: Some("AUL".to_string()),
            ..Default::default()
        };

        let edited = event.with_edit(&edit);
        assert_eq!(edited.id, 7);
        assert_eq!(edited.accident_year, 2019);
        assert_eq!(edited.period, 2018);
        assert_eq!(edited.event_name, "Michael");
        assert_eq!(edited.le_code, "AUL");

        // Source event untouched
        assert_eq!(event.accident_year, 2018);
    }

    #[test]
    fn test_empty_edit() {
        assert!(EventContextEdit::default().is_empty());
        let edit = EventContextEdit { unit: Some(1.0), ..Default::default() };
        assert!(!edit.is_empty());
    }
}
