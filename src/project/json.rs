//! JSON-file-backed project board.
//!
//! Stores the three tables as one JSON document — the local stand-in for
//! the hosted board the production system talks to. Sink mutations are
//! applied to the in-memory document; the caller persists them with
//! [`save`](JsonProjectStore::save) once the run is complete.

use std::fs;
use std::path::PathBuf;

use super::{ProjectData, ProjectSink, ProjectSource};
use crate::error::{Result, ScheduleError};
use crate::models::{Request, RequestStatus};

/// A project board document on disk.
#[derive(Debug, Clone)]
pub struct JsonProjectStore {
    path: PathBuf,
    data: ProjectData,
}

impl JsonProjectStore {
    /// Loads the board document at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let data = serde_json::from_str(&text)?;
        Ok(Self { path, data })
    }

    /// The current document, mutations included.
    pub fn data(&self) -> &ProjectData {
        &self.data
    }

    /// Writes the document back to disk.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn club_mut(&mut self, request_id: &str) -> Result<&mut Request> {
        self.data
            .clubs
            .iter_mut()
            .find(|club| club.id == request_id)
            .ok_or_else(|| ScheduleError::UnknownRequest(request_id.to_string()))
    }
}

impl ProjectSource for JsonProjectStore {
    fn fetch(&mut self) -> Result<ProjectData> {
        Ok(self.data.clone())
    }
}

impl ProjectSink for JsonProjectStore {
    fn set_status(&mut self, request_id: &str, status: RequestStatus) -> Result<()> {
        self.club_mut(request_id)?.status = status;
        Ok(())
    }

    fn set_timeslot(&mut self, request_id: &str, slot: &str) -> Result<()> {
        self.club_mut(request_id)?.timeslot = Some(slot.to_string());
        Ok(())
    }

    fn set_duration(&mut self, request_id: &str, minutes: u32) -> Result<()> {
        self.club_mut(request_id)?.duration_min = minutes;
        Ok(())
    }
}
