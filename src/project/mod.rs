//! Collaborator seams: where the scheduler meets the project board and
//! the published document.
//!
//! The production system reads a GitHub Projects board and writes custom
//! fields back through its API; that transport stays outside this crate.
//! These traits are the call contracts the core needs, with local
//! implementations: [`MemoryProject`] for tests and dry runs,
//! [`JsonProjectStore`] for a file-backed board, and
//! [`MarkdownReportSink`] for marker-based document publication.
//!
//! Sink calls are fire-and-forget from the core's perspective: a failure
//! propagates to the caller as a run-level error, but in-memory
//! allocation state is never rolled back to compensate.

mod json;
mod memory;
mod readme;

pub use json::JsonProjectStore;
pub use memory::{MemoryProject, MemoryReportSink, Mutation};
pub use readme::{MarkdownReportSink, DEFAULT_MARKER};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Person, Request, RequestStatus};

/// The three tables one run consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    /// Roster, in publication order.
    pub persons: Vec<Person>,
    /// Slot identifiers, in day order; may include the sentinel entry.
    pub timeslots: Vec<String>,
    /// Meeting requests.
    pub clubs: Vec<Request>,
}

/// Read side of the project board. Fetched once per run.
pub trait ProjectSource {
    /// Returns the persons, timeslots, and clubs tables.
    fn fetch(&mut self) -> Result<ProjectData>;
}

/// Write side of the project board, one call per field update.
pub trait ProjectSink {
    /// Moves a request to a status column.
    fn set_status(&mut self, request_id: &str, status: RequestStatus) -> Result<()>;

    /// Sets a request's timeslot field — a slot identifier, or the skip
    /// label for requests that found no window.
    fn set_timeslot(&mut self, request_id: &str, slot: &str) -> Result<()>;

    /// Sets a request's duration field.
    fn set_duration(&mut self, request_id: &str, minutes: u32) -> Result<()>;
}

/// Destination for the rendered schedule table.
pub trait ReportSink {
    /// Merges the table into the persisted document, stamped with the
    /// run's completion time.
    fn publish(&mut self, table: &str, completed_at: NaiveDateTime) -> Result<()>;
}
