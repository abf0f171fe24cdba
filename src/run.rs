//! Cycle orchestration.
//!
//! One scheduling cycle, end to end: fetch the tables, build the grid and
//! board, validate, allocate, publish. Strictly sequential — each request
//! is fully resolved before the next begins, and the report is published
//! once after the queue drains.
//!
//! External writes are never retried: a sink failure aborts the run and
//! can leave the board behind the in-memory plan. That risk is accepted;
//! the next cycle rebuilds everything from the board's current state.

use chrono::Local;
use rand::Rng;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{AvailabilityBoard, RequestStatus, TimeGrid};
use crate::project::{ProjectSink, ProjectSource, ReportSink};
use crate::report::ScheduleReport;
use crate::scheduler::{Allocator, RequestQueue, RunSummary};
use crate::validation;

/// Runs one scheduling cycle against the given collaborators.
pub fn schedule_cycle<P, Rep, R>(
    project: &mut P,
    report_sink: &mut Rep,
    config: &RunConfig,
    rng: &mut R,
) -> Result<RunSummary>
where
    P: ProjectSource + ProjectSink,
    Rep: ReportSink,
    R: Rng,
{
    let data = project.fetch()?;
    let grid = TimeGrid::from_slots(data.timeslots.clone(), config.slot_width_min)?;

    if let Err(errors) = validation::validate_input(&data, &grid, config.organizer.as_deref()) {
        for error in &errors {
            warn!(kind = ?error.kind, "{}", error.message);
        }
        let fatal: Vec<_> = errors.iter().filter(|e| e.kind.is_fatal()).collect();
        if let Some(first) = fatal.first() {
            return Err(ScheduleError::InvalidInput {
                count: fatal.len(),
                first: first.message.clone(),
            });
        }
    }

    let mut board = AvailabilityBoard::from_roster(&data.persons, &grid);
    let mut report = ScheduleReport::from_roster(&data.persons);
    let queue = RequestQueue::build(data.clubs, rng);
    info!(
        requests = queue.len(),
        slots = grid.len(),
        persons = data.persons.len(),
        "allocating"
    );

    let mut allocator = Allocator::new(grid).with_skip_label(config.skip_label.clone());
    if let Some(organizer) = &config.organizer {
        allocator = allocator.with_organizer(organizer.clone());
    }
    let summary = allocator.allocate(queue, &mut board, &mut report, project)?;

    report_sink.publish(&report.to_markdown(), Local::now().naive_local())?;
    info!(
        placed = summary.placements.len(),
        unplaced = summary.unplaced.len(),
        rejected = summary.rejected.len(),
        passed_through = summary.passed_through,
        "cycle complete"
    );
    Ok(summary)
}

/// Moves every `Scheduled` club to `Closed / Parked` at the end of the
/// cycle. Returns the number of closed requests.
pub fn close_out<P>(project: &mut P) -> Result<usize>
where
    P: ProjectSource + ProjectSink,
{
    let data = project.fetch()?;
    let mut closed = 0;
    for club in &data.clubs {
        if club.status == RequestStatus::Scheduled {
            project.set_status(&club.id, RequestStatus::ClosedParked)?;
            closed += 1;
        }
    }
    info!(closed, "close-out complete");
    Ok(closed)
}
