//! Per-person schedule accumulation and rendering.
//!
//! A pure read-accumulator: allocation decisions never consult it. Rows
//! keep roster order; entries within a row keep assignment order. The
//! rendered form is a GitHub-flavored two-column markdown table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Person;

/// Ordered per-person schedule entries for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleReport {
    order: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl ScheduleReport {
    /// Empty report with one row per roster member, roster order preserved.
    pub fn from_roster(persons: &[Person]) -> Self {
        let order: Vec<String> = persons.iter().map(|p| p.id.clone()).collect();
        let entries = order.iter().map(|id| (id.clone(), Vec::new())).collect();
        Self { order, entries }
    }

    /// Appends a schedule entry to a person's row. A person outside the
    /// roster gets a new row at the end.
    pub fn append(&mut self, person: &str, entry: impl Into<String>) {
        if !self.entries.contains_key(person) {
            self.order.push(person.to_string());
        }
        self.entries
            .entry(person.to_string())
            .or_default()
            .push(entry.into());
    }

    /// The entries assigned to a person so far.
    pub fn entries_for(&self, person: &str) -> &[String] {
        self.entries.get(person).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates rows in roster order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.entries_for(id)))
    }

    /// Number of rows.
    pub fn person_count(&self) -> usize {
        self.order.len()
    }

    /// Renders the two-column table published for the run.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("| id | schedule |\n| --- | --- |\n");
        for (person, entries) in self.rows() {
            out.push_str("| ");
            out.push_str(person);
            out.push_str(" | ");
            out.push_str(&entries.join(", "));
            out.push_str(" |\n");
        }
        out
    }
}
