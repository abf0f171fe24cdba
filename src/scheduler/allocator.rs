//! Greedy earliest-window allocation.
//!
//! # Algorithm
//!
//! 1. Take requests in queue order (carry-overs first, the rest shuffled).
//! 2. Pass through requests that are already `Scheduled`.
//! 3. Convert the duration into a span of consecutive slots; a duration
//!    that is not a positive multiple of the slot width rejects the
//!    request rather than shrinking its span.
//! 4. Inject the fixed organizer participant, if configured.
//! 5. Find the earliest window free for every assignee, reserve it, and
//!    append a schedule entry per assignee — or mark the request
//!    `Unscheduled` so it re-enters next cycle's queue with priority.
//!
//! First-fit with no backtracking: a placed request is never moved, and a
//! request that does not fit is skipped whole — there is no
//! partial-duration fallback.
//!
//! # Complexity
//! O(q * n * a) where q = requests, n = grid slots, a = assignees.

use tracing::{info, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{AvailabilityBoard, RequestStatus, TimeGrid};
use crate::project::ProjectSink;
use crate::report::ScheduleReport;
use crate::scheduler::RequestQueue;

/// A successfully placed request.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Placed request id.
    pub request_id: String,
    /// Meeting title.
    pub title: String,
    /// Grid position of the first reserved slot.
    pub start_position: usize,
    /// Slot identifier of the first reserved slot.
    pub start_slot: String,
    /// Number of reserved slots.
    pub span_length: usize,
}

/// Outcome of one allocation run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Requests placed this run, in placement order.
    pub placements: Vec<Placement>,
    /// Requests that found no window and were marked `Unscheduled`.
    pub unplaced: Vec<String>,
    /// Requests rejected for an invalid duration.
    pub rejected: Vec<String>,
    /// Requests passed through because they were already `Scheduled`.
    pub passed_through: usize,
}

impl RunSummary {
    /// Looks up the placement for a request.
    pub fn placement_for(&self, request_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.request_id == request_id)
    }
}

/// Greedy earliest-common-window allocator.
///
/// Owns the run's [`TimeGrid`] and processes the queue strictly
/// sequentially: one request is fully resolved — searched, reserved, and
/// reported to the sink — before the next begins.
#[derive(Debug, Clone)]
pub struct Allocator {
    grid: TimeGrid,
    organizer: Option<String>,
    skip_label: String,
}

impl Allocator {
    /// Creates an allocator over the given grid.
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            organizer: None,
            skip_label: "Skipped".into(),
        }
    }

    /// Sets the participant injected into every request's assignee list.
    pub fn with_organizer(mut self, id: impl Into<String>) -> Self {
        self.organizer = Some(id.into());
        self
    }

    /// Sets the timeslot label written back for unplaced requests.
    pub fn with_skip_label(mut self, label: impl Into<String>) -> Self {
        self.skip_label = label.into();
        self
    }

    /// The grid this allocator schedules against.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Processes the queue, mutating the board and report and pushing
    /// each decision to the sink.
    ///
    /// Sink failures propagate immediately; decisions already made stay
    /// in memory and are not rolled back.
    pub fn allocate<S: ProjectSink>(
        &self,
        queue: RequestQueue,
        board: &mut AvailabilityBoard,
        report: &mut ScheduleReport,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for mut request in queue {
            if request.status == RequestStatus::Scheduled {
                summary.passed_through += 1;
                continue;
            }

            let span = match request.span_length(self.grid.slot_width_min()) {
                Ok(span) => span,
                Err(err @ ScheduleError::InvalidDuration { .. }) => {
                    warn!(request = %request.id, %err, "rejecting request");
                    summary.rejected.push(request.id);
                    continue;
                }
                Err(err) => return Err(err),
            };

            if let Some(organizer) = &self.organizer {
                request.ensure_assignee(organizer);
            }

            match board.earliest_free_window(&request.assignees, span)? {
                None => {
                    info!(request = %request.id, title = %request.title, "no free window, skipped");
                    sink.set_status(&request.id, RequestStatus::Unscheduled)?;
                    sink.set_timeslot(&request.id, &self.skip_label)?;
                    summary.unplaced.push(request.id);
                }
                Some(start) => {
                    board.reserve(&request.assignees, start, span)?;
                    let start_slot = self.grid.slot_id(start)?.to_string();
                    let entry = format!("{} {}", request.title, self.grid.span_label(start, span)?);
                    for assignee in &request.assignees {
                        report.append(assignee, entry.clone());
                    }
                    info!(
                        request = %request.id,
                        title = %request.title,
                        slot = %start_slot,
                        span,
                        "scheduled"
                    );
                    sink.set_status(&request.id, RequestStatus::Scheduled)?;
                    sink.set_timeslot(&request.id, &start_slot)?;
                    sink.set_duration(&request.id, request.duration_min)?;
                    summary.placements.push(Placement {
                        request_id: request.id,
                        title: request.title,
                        start_position: start,
                        start_slot,
                        span_length: span,
                    });
                }
            }
        }

        Ok(summary)
    }
}
