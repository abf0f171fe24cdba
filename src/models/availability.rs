//! Per-person free/busy state over the time grid.
//!
//! One boolean vector per roster member, indexed 1:1 with grid positions
//! (`true` = free). The board is built once per run, mutated only by the
//! allocator, and discarded after publication.
//!
//! # Invariants
//! - Declared unavailability (`busy_prefix`) is applied at construction
//!   and is indistinguishable from reservations afterward.
//! - Reservations are irreversible within a run; there is no un-reserve.
//! - A window is free only if it lies fully inside the grid: spans are
//!   half-open, so an exact fit against the end of the day is accepted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Person, TimeGrid};
use crate::error::{Result, ScheduleError};

/// Free/busy vectors for the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityBoard {
    slots: usize,
    rows: HashMap<String, Vec<bool>>,
}

impl AvailabilityBoard {
    /// All-free board for the roster, with each person's `busy_prefix`
    /// override applied.
    pub fn from_roster(persons: &[Person], grid: &TimeGrid) -> Self {
        let slots = grid.len();
        let rows = persons
            .iter()
            .map(|person| {
                let mut free = vec![true; slots];
                free[..person.busy_prefix.min(slots)].fill(false);
                (person.id.clone(), free)
            })
            .collect();
        Self { slots, rows }
    }

    /// Number of grid positions per row.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    fn row(&self, person: &str) -> Result<&[bool]> {
        self.rows
            .get(person)
            .map(Vec::as_slice)
            .ok_or_else(|| ScheduleError::UnknownPerson(person.to_string()))
    }

    /// Whether a person is free at a single position.
    pub fn is_free(&self, person: &str, position: usize) -> Result<bool> {
        Ok(self.row(person)?.get(position).copied().unwrap_or(false))
    }

    /// True iff the window lies inside the grid and every listed person
    /// is free across `[start, start + span)`.
    pub fn is_window_free(&self, persons: &[String], start: usize, span: usize) -> Result<bool> {
        if start + span > self.slots {
            return Ok(false);
        }
        for person in persons {
            let row = self.row(person)?;
            if !row[start..start + span].iter().all(|&free| free) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// First position whose window of `span` slots is free for every
    /// listed person, scanning left to right.
    ///
    /// This is a sliding-window all-true search over the conjunction of
    /// the listed rows. Returns `None` when no window exists before the
    /// day ends; an exact fit against the last slots is accepted.
    pub fn earliest_free_window(&self, persons: &[String], span: usize) -> Result<Option<usize>> {
        if span > self.slots {
            // Surface unknown assignees even when nothing can fit.
            for person in persons {
                self.row(person)?;
            }
            return Ok(None);
        }
        for start in 0..=self.slots - span {
            if self.is_window_free(persons, start, span)? {
                return Ok(Some(start));
            }
        }
        Ok(None)
    }

    /// Marks `[start, start + span)` busy for every listed person.
    ///
    /// The caller guarantees the window was free (checked via
    /// [`earliest_free_window`](Self::earliest_free_window)); reserving an
    /// occupied window corrupts the run's no-double-booking invariant.
    pub fn reserve(&mut self, persons: &[String], start: usize, span: usize) -> Result<()> {
        if start + span > self.slots {
            return Err(ScheduleError::SlotOutOfRange {
                position: start + span,
                len: self.slots,
            });
        }
        for person in persons {
            let row = self
                .rows
                .get_mut(person)
                .ok_or_else(|| ScheduleError::UnknownPerson(person.clone()))?;
            row[start..start + span].fill(false);
        }
        Ok(())
    }
}
