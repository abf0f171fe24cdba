//! Roster entry model.

use serde::{Deserialize, Serialize};

/// A person who can be assigned to meeting requests.
///
/// Availability lives on the [`AvailabilityBoard`](super::AvailabilityBoard),
/// keyed by person id; assigned schedule entries accumulate in the
/// [`ScheduleReport`](crate::report::ScheduleReport). A person record is
/// created fresh each run from the roster and discarded after publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier (the board login).
    pub id: String,
    /// Number of leading slots this person is unavailable for
    /// (declared exogenous unavailability, applied before allocation).
    #[serde(default)]
    pub busy_prefix: usize,
}

impl Person {
    /// Creates a fully available person.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            busy_prefix: 0,
        }
    }

    /// Marks the first `count` slots of the day as unavailable.
    pub fn with_busy_prefix(mut self, count: usize) -> Self {
        self.busy_prefix = count;
        self
    }
}
