//! Discrete time grid for a single scheduling day.
//!
//! The day is cut into equally wide slots, each identified by its start
//! clock time ("09:00", "09:15", ...). The data source may include one
//! sentinel entry (the label written back for requests that found no
//! window); it is dropped when the grid is built.
//!
//! # Invariants
//! Slot identifiers parse as `%H:%M`, are strictly increasing, and are
//! spaced exactly one slot width apart. Violations are `InvalidGrid`.
//!
//! # Time Model
//! Spans are half-open: a span of `n` slots starting at position `p`
//! covers `[p, p + n)`, and its end clock time is `start + n × width`.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, ScheduleError};

/// Default slot width in minutes.
pub const DEFAULT_SLOT_WIDTH_MIN: u32 = 15;

/// Sentinel slot identifier, excluded from the grid (matched case-insensitively).
pub const SKIP_SENTINEL: &str = "skipped";

/// The ordered slot sequence of one scheduling day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeGrid {
    slot_ids: Vec<String>,
    times: Vec<NaiveTime>,
    index: HashMap<String, usize>,
    slot_width_min: u32,
}

impl TimeGrid {
    /// Builds a grid from the slot identifiers delivered by the data source.
    ///
    /// The sentinel entry is dropped; the remaining identifiers must
    /// satisfy the grid invariants.
    pub fn from_slots<I, S>(raw: I, slot_width_min: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if slot_width_min == 0 {
            return Err(ScheduleError::InvalidGrid(
                "slot width must be positive".into(),
            ));
        }

        let mut slot_ids = Vec::new();
        let mut times = Vec::new();
        for id in raw {
            let id = id.into();
            if id.eq_ignore_ascii_case(SKIP_SENTINEL) {
                continue;
            }
            let time = NaiveTime::parse_from_str(&id, "%H:%M").map_err(|_| {
                ScheduleError::InvalidGrid(format!("slot '{id}' is not an HH:MM clock time"))
            })?;
            slot_ids.push(id);
            times.push(time);
        }

        if slot_ids.is_empty() {
            return Err(ScheduleError::InvalidGrid("no timeslots".into()));
        }

        // Equal spacing by a positive width implies strictly increasing.
        for (i, pair) in times.windows(2).enumerate() {
            let gap = pair[1].signed_duration_since(pair[0]);
            if gap != Duration::minutes(i64::from(slot_width_min)) {
                return Err(ScheduleError::InvalidGrid(format!(
                    "slots '{}' and '{}' are {} min apart, expected {}",
                    slot_ids[i],
                    slot_ids[i + 1],
                    gap.num_minutes(),
                    slot_width_min
                )));
            }
        }

        let index = slot_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        Ok(Self {
            slot_ids,
            times,
            index,
            slot_width_min,
        })
    }

    /// Number of slots in the day.
    pub fn len(&self) -> usize {
        self.slot_ids.len()
    }

    /// Whether the grid has no slots.
    pub fn is_empty(&self) -> bool {
        self.slot_ids.is_empty()
    }

    /// Slot width in minutes.
    #[inline]
    pub fn slot_width_min(&self) -> u32 {
        self.slot_width_min
    }

    /// Position of a slot identifier.
    pub fn position(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ScheduleError::UnknownSlot(id.to_string()))
    }

    /// Slot identifier at a position.
    pub fn slot_id(&self, position: usize) -> Result<&str> {
        self.slot_ids
            .get(position)
            .map(String::as_str)
            .ok_or(ScheduleError::SlotOutOfRange {
                position,
                len: self.slot_ids.len(),
            })
    }

    /// Start clock time of the slot at a position.
    pub fn start_time(&self, position: usize) -> Result<NaiveTime> {
        self.times
            .get(position)
            .copied()
            .ok_or(ScheduleError::SlotOutOfRange {
                position,
                len: self.times.len(),
            })
    }

    /// End clock time of a span: `start + span × width` (exclusive).
    pub fn span_end(&self, position: usize, span: usize) -> Result<NaiveTime> {
        let start = self.start_time(position)?;
        Ok(start + Duration::minutes(span as i64 * i64::from(self.slot_width_min)))
    }

    /// "HH:MM-HH:MM" label for a span, as published in schedule entries.
    pub fn span_label(&self, position: usize, span: usize) -> Result<String> {
        let start = self.start_time(position)?;
        let end = self.span_end(position, span)?;
        Ok(format!(
            "{}-{}",
            start.format("%H:%M"),
            end.format("%H:%M")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_grid() -> TimeGrid {
        TimeGrid::from_slots(["09:00", "09:15", "09:30", "09:45"], 15).unwrap()
    }

    #[test]
    fn test_grid_basics() {
        let grid = quarter_grid();
        assert_eq!(grid.len(), 4);
        assert!(!grid.is_empty());
        assert_eq!(grid.slot_width_min(), 15);
        assert_eq!(grid.position("09:30").unwrap(), 2);
        assert_eq!(grid.slot_id(0).unwrap(), "09:00");
        assert_eq!(grid.slot_id(3).unwrap(), "09:45");
    }

    #[test]
    fn test_sentinel_excluded() {
        let grid =
            TimeGrid::from_slots(["skipped", "09:00", "09:15"], 15).unwrap();
        assert_eq!(grid.len(), 2);
        assert!(matches!(
            grid.position("skipped"),
            Err(ScheduleError::UnknownSlot(_))
        ));

        // Case-insensitive match
        let grid = TimeGrid::from_slots(["Skipped", "10:00"], 15).unwrap();
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_unknown_slot() {
        let grid = quarter_grid();
        assert!(matches!(
            grid.position("23:59"),
            Err(ScheduleError::UnknownSlot(_))
        ));
        assert!(matches!(
            grid.slot_id(4),
            Err(ScheduleError::SlotOutOfRange { position: 4, len: 4 })
        ));
    }

    #[test]
    fn test_span_arithmetic() {
        let grid = quarter_grid();
        assert_eq!(grid.span_label(0, 2).unwrap(), "09:00-09:30");
        assert_eq!(grid.span_label(1, 1).unwrap(), "09:15-09:30");
        // Exact fit: span ends one width past the last slot's start
        assert_eq!(grid.span_label(0, 4).unwrap(), "09:00-10:00");
    }

    #[test]
    fn test_invalid_slot_format() {
        let err = TimeGrid::from_slots(["nine o'clock"], 15).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidGrid(_)));
    }

    #[test]
    fn test_uneven_spacing() {
        let err = TimeGrid::from_slots(["09:00", "09:20"], 15).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidGrid(_)));
    }

    #[test]
    fn test_decreasing_slots() {
        let err = TimeGrid::from_slots(["09:15", "09:00"], 15).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidGrid(_)));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(TimeGrid::from_slots(Vec::<String>::new(), 15).is_err());
        // A grid that is all sentinel is also empty
        assert!(TimeGrid::from_slots(["skipped"], 15).is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(TimeGrid::from_slots(["09:00"], 0).is_err());
    }
}
