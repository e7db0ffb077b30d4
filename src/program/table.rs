//! Ordered program table for one event

use super::data::{or_zero, Program};
use crate::error::ReservingError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of programs keyed by id
///
/// Ids are unique within the table and never change once assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Program>", into = "Vec<Program>")]
pub struct ProgramTable {
    programs: Vec<Program>,
}

impl ProgramTable {
    /// Build a table, rejecting duplicate ids
    pub fn new(programs: Vec<Program>) -> Result<Self, ReservingError> {
        let mut seen = HashSet::with_capacity(programs.len());
        for program in &programs {
            if !seen.insert(program.id) {
                return Err(ReservingError::DuplicateProgramId(program.id));
            }
        }
        Ok(Self { programs })
    }

    pub fn get(&self, id: u32) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Program ids in table order
    pub fn ids(&self) -> Vec<u32> {
        self.programs.iter().map(|p| p.id).collect()
    }

    pub fn first(&self) -> Option<&Program> {
        self.programs.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Program> {
        self.programs.iter()
    }

    pub fn as_slice(&self) -> &[Program] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Next free id: one past the largest id in the table
    ///
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        match self.programs.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a blank program with the next free id and return that id
    pub fn add_program(&mut self, currency: &str) -> Result<u32, ReservingError> {
        let id = self.next_id().ok_or(ReservingError::ProgramIdsExhausted)?;
        self.programs.push(Program::blank(id, currency));
        Ok(id)
    }

    /// Whole-table replacement from the program grid
    ///
    /// The edited table must carry exactly the same ids in the same order:
    /// ids are read-only in the grid and programs are never deleted. On error
    /// the stored table is left untouched.
    pub fn replace(&mut self, edited: ProgramTable) -> Result<(), ReservingError> {
        let rows = self.programs.len().max(edited.programs.len());
        for row in 0..rows {
            let expected = self.programs.get(row).map(|p| p.id);
            let found = edited.programs.get(row).map(|p| p.id);
            if expected != found {
                return Err(ReservingError::ProgramIdMismatch { row, expected, found });
            }
        }

        self.programs = edited.programs;
        Ok(())
    }

    /// Column sums across the table, absent values counted as zero
    pub fn summary(&self) -> ProgramSummary {
        let mut summary = ProgramSummary {
            program_count: self.programs.len(),
            ..Default::default()
        };

        for p in &self.programs {
            summary.exposed += or_zero(p.exposed);
            summary.rep_fgu += or_zero(p.rep_fgu);
            summary.rep_unl += or_zero(p.rep_unl);
            summary.selected_unl += or_zero(p.selected_unl);
            summary.layer_loss += or_zero(p.layer_loss);
            summary.arch_loss += or_zero(p.arch_loss);
            summary.arch_usd_gross += or_zero(p.arch_usd_gross);
            summary.arch_usd_ceded_to_us += or_zero(p.arch_usd_ceded_to_us);
            summary.arch_usd_net += or_zero(p.arch_usd_net);
            summary.arch_usd_net_rp += or_zero(p.arch_usd_net_rp);
            summary.arch_usd_net_of_rp += or_zero(p.arch_usd_net_of_rp);
            summary.booked_prior_gross += or_zero(p.booked_prior_gross);
            summary.booked_prior_net_of_rp += or_zero(p.booked_prior_net_of_rp);
            summary.change_gross += or_zero(p.change_gross);
            summary.change_net_of_rp += or_zero(p.change_net_of_rp);
        }

        summary
    }
}

impl TryFrom<Vec<Program>> for ProgramTable {
    type Error = ReservingError;

    fn try_from(programs: Vec<Program>) -> Result<Self, Self::Error> {
        Self::new(programs)
    }
}

impl From<ProgramTable> for Vec<Program> {
    fn from(table: ProgramTable) -> Self {
        table.programs
    }
}

impl<'a> IntoIterator for &'a ProgramTable {
    type Item = &'a Program;
    type IntoIter = std::slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}

/// Aggregate figures for the program grid footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub program_count: usize,
    pub exposed: f64,
    pub rep_fgu: f64,
    pub rep_unl: f64,
    pub selected_unl: f64,
    pub layer_loss: f64,
    pub arch_loss: f64,
    pub arch_usd_gross: f64,
    pub arch_usd_ceded_to_us: f64,
    pub arch_usd_net: f64,
    pub arch_usd_net_rp: f64,
    pub arch_usd_net_of_rp: f64,
    pub booked_prior_gross: f64,
    pub booked_prior_net_of_rp: f64,
    pub change_gross: f64,
    pub change_net_of_rp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn program(id: u32, selected_unl: Option<f64>) -> Program {
        let mut p = Program::blank(id, "USD");
        p.selected_unl = selected_unl;
        p
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ProgramTable::new(vec![program(1, None), program(1, None)]);
        assert!(matches!(result, Err(ReservingError::DuplicateProgramId(1))));
    }

    #[test]
    fn test_next_id_and_add() {
        let mut table = ProgramTable::default();
        assert_eq!(table.next_id(), Some(1));

        let mut table2 = ProgramTable::new(vec![program(3, None), program(8, None)]).unwrap();
        assert_eq!(table2.add_program("EUR").unwrap(), 9);
        assert_eq!(table2.ids(), vec![3, 8, 9]);
        assert_eq!(table2.get(9).unwrap().currency, "EUR");

        assert_eq!(table.add_program("USD").unwrap(), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_program_after_max_id() {
        let mut table = ProgramTable::new(vec![program(u32::MAX, None)]).unwrap();
        assert_eq!(table.next_id(), None);
        assert!(matches!(table.add_program("USD"), Err(ReservingError::ProgramIdsExhausted)));
        assert_eq!(table.ids(), vec![u32::MAX]);

        let mut below = ProgramTable::new(vec![program(u32::MAX - 1, None)]).unwrap();
        assert_eq!(below.add_program("USD").unwrap(), u32::MAX);
    }

    #[test]
    fn test_replace_keeps_ids() {
        let mut table = ProgramTable::new(vec![program(1, Some(10.0)), program(2, None)]).unwrap();

        let mut edited = table.clone();
        edited.programs[1].selected_unl = Some(500.0);
        table.replace(edited).unwrap();
        assert_eq!(table.get(2).unwrap().selected_unl, Some(500.0));
    }

    #[test]
    fn test_replace_rejects_changed_id() {
        let mut table = ProgramTable::new(vec![program(1, Some(10.0)), program(2, None)]).unwrap();
        let before = table.clone();

        let mut edited = table.clone();
        edited.programs[1].id = 5;
        edited.programs[0].selected_unl = Some(99.0);

        let err = table.replace(edited).unwrap_err();
        assert!(matches!(
            err,
            ReservingError::ProgramIdMismatch { row: 1, expected: Some(2), found: Some(5) }
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_replace_rejects_missing_and_extra_rows() {
        let mut table = ProgramTable::new(vec![program(1, None), program(2, None)]).unwrap();

        let shorter = ProgramTable::new(vec![program(1, None)]).unwrap();
        assert!(matches!(
            table.replace(shorter),
            Err(ReservingError::ProgramIdMismatch { row: 1, expected: Some(2), found: None })
        ));

        let longer = ProgramTable::new(vec![program(1, None), program(2, None), program(3, None)]).unwrap();
        assert!(matches!(
            table.replace(longer),
            Err(ReservingError::ProgramIdMismatch { row: 2, expected: None, found: Some(3) })
        ));
    }

    #[test]
    fn test_summary_treats_absent_as_zero() {
        let mut a = program(1, Some(1_000.0));
        a.exposed = Some(1.0);
        a.change_gross = Some(-25.0);
        let b = program(2, None);
        let mut c = program(3, Some(234_000.0));
        c.arch_loss = Some(4_000.0);
        c.arch_usd_ceded_to_us = Some(1_903.0);
        c.arch_usd_net_rp = Some(2_097.0);
        a.arch_usd_ceded_to_us = Some(97.0);

        let table = ProgramTable::new(vec![a, b, c]).unwrap();
        let summary = table.summary();

        assert_eq!(summary.program_count, 3);
        assert_relative_eq!(summary.selected_unl, 235_000.0);
        assert_relative_eq!(summary.arch_loss, 4_000.0);
        assert_relative_eq!(summary.exposed, 1.0);
        assert_relative_eq!(summary.change_gross, -25.0);
        assert_relative_eq!(summary.layer_loss, 0.0);
        assert_relative_eq!(summary.arch_usd_ceded_to_us, 2_000.0);
        assert_relative_eq!(summary.arch_usd_net_rp, 2_097.0);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[{"id": 1}, {"id": 1}]"#;
        let result: Result<ProgramTable, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"[{"id": 4, "Cedant": "Travelers"}]"#;
        let table: ProgramTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get(4).unwrap().cedant, "Travelers");
    }
}
