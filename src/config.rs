//! Run configuration.
//!
//! Parameters of the weekly cycle that are policy rather than data:
//! which participant joins every meeting, how wide a slot is, and where
//! the board document and the published schedule live. Loaded from TOML;
//! every field has a default, so a missing file or an empty table is a
//! usable configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::DEFAULT_SLOT_WIDTH_MIN;
use crate::project::DEFAULT_MARKER;

/// Configuration for one scheduling cycle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Participant injected into every request's assignee list.
    pub organizer: Option<String>,
    /// Slot width in minutes.
    pub slot_width_min: u32,
    /// Timeslot label written back for requests that found no window.
    pub skip_label: String,
    /// Path to the JSON board document.
    pub board_path: PathBuf,
    /// Path to the markdown document receiving the schedule table.
    pub report_path: PathBuf,
    /// Marker line that delimits the schedule section.
    pub report_marker: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            organizer: None,
            slot_width_min: DEFAULT_SLOT_WIDTH_MIN,
            skip_label: "Skipped".to_string(),
            board_path: PathBuf::from("board.json"),
            report_path: PathBuf::from("README.md"),
            report_marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert!(config.organizer.is_none());
        assert_eq!(config.slot_width_min, 15);
        assert_eq!(config.skip_label, "Skipped");
        assert_eq!(config.report_marker, "## Current Schedule");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RunConfig = toml::from_str(
            r#"
            organizer = "olive"
            board_path = "data/board.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.organizer.as_deref(), Some("olive"));
        assert_eq!(config.board_path, PathBuf::from("data/board.json"));
        assert_eq!(config.slot_width_min, 15);
    }

    #[test]
    fn test_full_toml() {
        let config: RunConfig = toml::from_str(
            r###"
            organizer = "olive"
            slot_width_min = 30
            skip_label = "None"
            board_path = "b.json"
            report_path = "SCHEDULE.md"
            report_marker = "## This Week"
            "###,
        )
        .unwrap();
        assert_eq!(config.slot_width_min, 30);
        assert_eq!(config.report_marker, "## This Week");
    }
}
