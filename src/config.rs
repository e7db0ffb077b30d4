//! Session configuration

use crate::lawf::LawfParams;
use crate::program::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Event to open; `None` opens the first event in the store
    #[serde(default)]
    pub event_id: Option<u32>,

    /// Currency given to programs created with "Add Program"
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Placeholder LAWF curve parameters
    #[serde(default)]
    pub lawf: LawfParams,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            event_id: None,
            default_currency: default_currency(),
            lawf: LawfParams::default(),
        }
    }
}

impl SessionConfig {
    /// Open a specific event
    pub fn for_event(mut self, event_id: u32) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
