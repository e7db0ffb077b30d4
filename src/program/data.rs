//! Program records matching the program grid columns

use serde::{Deserialize, Serialize};

/// Default currency for newly added programs
pub const DEFAULT_CURRENCY: &str = "USD";

/// One reinsurance program / cedant relationship within an event
///
/// Serialized names follow the program grid headers so CSV files and JSON
/// payloads line up with what the user sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier within the event, never edited
    pub id: u32,

    // ---- Identity ----

    #[serde(rename = "Cedant", default)]
    pub cedant: String,

    #[serde(rename = "Program#", default)]
    pub program_number: String,

    #[serde(rename = "Program Desc", default)]
    pub description: String,

    #[serde(rename = "Facility", default)]
    pub facility: String,

    /// Line of business
    #[serde(rename = "LOB", default)]
    pub lob: String,

    #[serde(rename = "Company", default)]
    pub company: String,

    /// Underwriter initials
    #[serde(rename = "UW", default)]
    pub underwriter: String,

    /// Treaty type (XS, QS, ...)
    #[serde(rename = "Type", default)]
    pub program_type: String,

    #[serde(rename = "Currency", default)]
    pub currency: String,

    /// FX rate to USD
    #[serde(rename = "FX", default)]
    pub fx: Option<f64>,

    // ---- Exposure and reported losses ----

    #[serde(rename = "Exposed", default)]
    pub exposed: Option<f64>,

    /// Reported from-ground-up loss
    #[serde(rename = "Rep_FGU", default)]
    pub rep_fgu: Option<f64>,

    /// Reported ultimate net loss
    #[serde(rename = "Rep_UNL", default)]
    pub rep_unl: Option<f64>,

    /// Selected ultimate net loss
    #[serde(rename = "Selected UNL", default)]
    pub selected_unl: Option<f64>,

    #[serde(rename = "Layer Loss", default)]
    pub layer_loss: Option<f64>,

    // ---- Arch share of the loss ----

    #[serde(rename = "Arch Loss", default)]
    pub arch_loss: Option<f64>,

    #[serde(rename = "Arch USD Gross", default)]
    pub arch_usd_gross: Option<f64>,

    #[serde(rename = "Arch USD Ceded to US", default)]
    pub arch_usd_ceded_to_us: Option<f64>,

    #[serde(rename = "Arch USD Net", default)]
    pub arch_usd_net: Option<f64>,

    /// Net reinstatement premium
    #[serde(rename = "Arch USD NetRP", default)]
    pub arch_usd_net_rp: Option<f64>,

    #[serde(rename = "Arch USD Net of RP", default)]
    pub arch_usd_net_of_rp: Option<f64>,

    // ---- Booked prior and movement ----

    #[serde(rename = "Booked Prior Gross", default)]
    pub booked_prior_gross: Option<f64>,

    #[serde(rename = "Booked Prior Net of RP", default)]
    pub booked_prior_net_of_rp: Option<f64>,

    #[serde(rename = "Change Gross", default)]
    pub change_gross: Option<f64>,

    #[serde(rename = "Change Net of RP", default)]
    pub change_net_of_rp: Option<f64>,
}

impl Program {
    /// Create an empty program row, as added by "Add Program"
    pub fn blank(id: u32, currency: impl Into<String>) -> Self {
        Self {
            id,
            cedant: String::new(),
            program_number: String::new(),
            description: String::new(),
            facility: String::new(),
            lob: String::new(),
            company: String::new(),
            underwriter: String::new(),
            program_type: String::new(),
            currency: currency.into(),
            fx: Some(1.0),
            exposed: None,
            rep_fgu: None,
            rep_unl: None,
            selected_unl: None,
            layer_loss: None,
            arch_loss: None,
            arch_usd_gross: None,
            arch_usd_ceded_to_us: None,
            arch_usd_net: None,
            arch_usd_net_rp: None,
            arch_usd_net_of_rp: None,
            booked_prior_gross: None,
            booked_prior_net_of_rp: None,
            change_gross: None,
            change_net_of_rp: None,
        }
    }

    /// Selected UNL with an absent value read as zero
    pub fn selected_unl_or_zero(&self) -> f64 {
        or_zero(self.selected_unl)
    }

    /// Arch loss with an absent value read as zero
    pub fn arch_loss_or_zero(&self) -> f64 {
        or_zero(self.arch_loss)
    }

    /// Label used by program pickers: "2 - St Johns Insurance"
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.cedant)
    }
}

/// Absent or NaN figures count as zero in every aggregate
pub(crate) fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_program() {
        let program = Program::blank(9, DEFAULT_CURRENCY);
        assert_eq!(program.id, 9);
        assert_eq!(program.currency, "USD");
        assert_eq!(program.selected_unl, None);
        assert_eq!(program.selected_unl_or_zero(), 0.0);
        assert_eq!(program.arch_loss_or_zero(), 0.0);
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(or_zero(Some(12.5)), 12.5);
        assert_eq!(or_zero(None), 0.0);
        assert_eq!(or_zero(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn test_json_uses_grid_labels() {
        let mut program = Program::blank(2, "USD");
        program.cedant = "St Johns Insurance".to_string();
        program.selected_unl = Some(234_000.0);

        let json = serde_json::to_value(&program).unwrap();
        assert_eq!(json["Cedant"], "St Johns Insurance");
        assert_eq!(json["Selected UNL"], 234_000.0);
        assert_eq!(json["Program#"], "");
        assert!(json["Arch Loss"].is_null());

        let back: Program = serde_json::from_value(json).unwrap();
        assert_eq!(back, program);
        assert_eq!(back.label(), "2 - St Johns Insurance");
    }
}
