//! Meeting request (club) model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ScheduleError};

/// Duration assumed when the board carries no duration value (minutes).
pub const DEFAULT_DURATION_MIN: u32 = 30;

/// Lifecycle status of a request, with the project board's column labels.
///
/// Only `ToBeScheduled` and `Scheduled` are eligible for processing this
/// cycle; `Unscheduled` carry-overs re-enter the queue with priority, and
/// `ClosedParked` requests are ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "To be scheduled")]
    ToBeScheduled,
    Scheduled,
    Unscheduled,
    #[serde(rename = "Closed / Parked")]
    ClosedParked,
}

impl RequestStatus {
    /// The board's column label for this status.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::ToBeScheduled => "To be scheduled",
            Self::Scheduled => "Scheduled",
            Self::Unscheduled => "Unscheduled",
            Self::ClosedParked => "Closed / Parked",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A club meeting request read from the project board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Board item identifier.
    pub id: String,
    /// Meeting title, as published in schedule entries.
    pub title: String,
    /// Requested duration in minutes. Must be a positive multiple of the
    /// slot width; anything else is rejected, never truncated.
    #[serde(default = "default_duration")]
    pub duration_min: u32,
    /// Current lifecycle status.
    #[serde(default = "default_status")]
    pub status: RequestStatus,
    /// People required to attend, in board order.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Assigned starting slot, once scheduled.
    #[serde(default)]
    pub timeslot: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MIN
}

fn default_status() -> RequestStatus {
    RequestStatus::ToBeScheduled
}

impl Request {
    /// Creates a request with the default duration, to be scheduled.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_min: DEFAULT_DURATION_MIN,
            status: RequestStatus::ToBeScheduled,
            assignees: Vec::new(),
            timeslot: None,
        }
    }

    /// Sets the duration in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_min = minutes;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds an assignee.
    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        self.assignees.push(id.into());
        self
    }

    /// Number of consecutive slots this request occupies.
    ///
    /// Fails with `InvalidDuration` when the duration is zero or not an
    /// exact multiple of the slot width.
    pub fn span_length(&self, slot_width_min: u32) -> Result<usize> {
        if self.duration_min == 0 || self.duration_min % slot_width_min != 0 {
            return Err(ScheduleError::InvalidDuration {
                id: self.id.clone(),
                minutes: self.duration_min,
                slot_width: slot_width_min,
            });
        }
        Ok((self.duration_min / slot_width_min) as usize)
    }

    /// Appends `id` to the assignee list if not already present,
    /// preserving the order of everyone else.
    pub fn ensure_assignee(&mut self, id: &str) {
        if !self.assignees.iter().any(|a| a == id) {
            self.assignees.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = Request::new("c1", "Journal Club")
            .with_duration(45)
            .with_status(RequestStatus::Unscheduled)
            .with_assignee("ada")
            .with_assignee("grace");

        assert_eq!(request.id, "c1");
        assert_eq!(request.duration_min, 45);
        assert_eq!(request.status, RequestStatus::Unscheduled);
        assert_eq!(request.assignees, vec!["ada", "grace"]);
        assert!(request.timeslot.is_none());
    }

    #[test]
    fn test_span_length() {
        let request = Request::new("c1", "T").with_duration(30);
        assert_eq!(request.span_length(15).unwrap(), 2);

        let request = Request::new("c1", "T").with_duration(60);
        assert_eq!(request.span_length(15).unwrap(), 4);
    }

    #[test]
    fn test_span_length_rejects_non_multiples() {
        // 20 is not a multiple of 15 — rejected, not floored to span 1
        let request = Request::new("c1", "T").with_duration(20);
        assert!(matches!(
            request.span_length(15),
            Err(ScheduleError::InvalidDuration {
                minutes: 20,
                slot_width: 15,
                ..
            })
        ));
    }

    #[test]
    fn test_span_length_rejects_zero() {
        let request = Request::new("c1", "T").with_duration(0);
        assert!(request.span_length(15).is_err());
    }

    #[test]
    fn test_ensure_assignee_idempotent() {
        let mut request = Request::new("c1", "T")
            .with_assignee("ada")
            .with_assignee("grace");

        request.ensure_assignee("olive");
        assert_eq!(request.assignees, vec!["ada", "grace", "olive"]);

        // Already present: order and length unchanged
        request.ensure_assignee("ada");
        assert_eq!(request.assignees, vec!["ada", "grace", "olive"]);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RequestStatus::ToBeScheduled.as_label(), "To be scheduled");
        assert_eq!(RequestStatus::ClosedParked.as_label(), "Closed / Parked");
        assert_eq!(RequestStatus::Scheduled.to_string(), "Scheduled");
    }

    #[test]
    fn test_board_defaults() {
        // A board item with no duration or status fields
        let request: Request =
            serde_json::from_str(r#"{"id": "c9", "title": "Standup"}"#).unwrap();
        assert_eq!(request.duration_min, DEFAULT_DURATION_MIN);
        assert_eq!(request.status, RequestStatus::ToBeScheduled);
        assert!(request.assignees.is_empty());
    }

    #[test]
    fn test_status_board_labels_roundtrip() {
        let status: RequestStatus = serde_json::from_str(r#""To be scheduled""#).unwrap();
        assert_eq!(status, RequestStatus::ToBeScheduled);
        let status: RequestStatus = serde_json::from_str(r#""Closed / Parked""#).unwrap();
        assert_eq!(status, RequestStatus::ClosedParked);
        assert_eq!(
            serde_json::to_string(&RequestStatus::Unscheduled).unwrap(),
            r#""Unscheduled""#
        );
    }
}
