//! In-memory project board for tests and dry runs.

use chrono::NaiveDateTime;

use super::{ProjectData, ProjectSink, ProjectSource, ReportSink};
use crate::error::Result;
use crate::models::RequestStatus;

/// A recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Status {
        request_id: String,
        status: RequestStatus,
    },
    Timeslot {
        request_id: String,
        slot: String,
    },
    Duration {
        request_id: String,
        minutes: u32,
    },
}

/// Board stand-in that serves fixed tables and records every mutation.
#[derive(Debug, Clone, Default)]
pub struct MemoryProject {
    /// Tables served by `fetch`.
    pub data: ProjectData,
    /// Sink calls, in arrival order.
    pub mutations: Vec<Mutation>,
}

impl MemoryProject {
    /// Creates a board serving the given tables.
    pub fn new(data: ProjectData) -> Self {
        Self {
            data,
            mutations: Vec::new(),
        }
    }

    /// The mutations recorded for one request, in arrival order.
    pub fn mutations_for(&self, request_id: &str) -> Vec<&Mutation> {
        self.mutations
            .iter()
            .filter(|m| match m {
                Mutation::Status { request_id: id, .. }
                | Mutation::Timeslot { request_id: id, .. }
                | Mutation::Duration { request_id: id, .. } => id == request_id,
            })
            .collect()
    }
}

impl ProjectSource for MemoryProject {
    fn fetch(&mut self) -> Result<ProjectData> {
        Ok(self.data.clone())
    }
}

impl ProjectSink for MemoryProject {
    fn set_status(&mut self, request_id: &str, status: RequestStatus) -> Result<()> {
        self.mutations.push(Mutation::Status {
            request_id: request_id.to_string(),
            status,
        });
        Ok(())
    }

    fn set_timeslot(&mut self, request_id: &str, slot: &str) -> Result<()> {
        self.mutations.push(Mutation::Timeslot {
            request_id: request_id.to_string(),
            slot: slot.to_string(),
        });
        Ok(())
    }

    fn set_duration(&mut self, request_id: &str, minutes: u32) -> Result<()> {
        self.mutations.push(Mutation::Duration {
            request_id: request_id.to_string(),
            minutes,
        });
        Ok(())
    }
}

/// Report destination that keeps every published table.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportSink {
    /// Published tables with their completion stamps, in publish order.
    pub published: Vec<(NaiveDateTime, String)>,
}

impl MemoryReportSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published table, if any.
    pub fn last_table(&self) -> Option<&str> {
        self.published.last().map(|(_, table)| table.as_str())
    }
}

impl ReportSink for MemoryReportSink {
    fn publish(&mut self, table: &str, completed_at: NaiveDateTime) -> Result<()> {
        self.published.push((completed_at, table.to_string()));
        Ok(())
    }
}
