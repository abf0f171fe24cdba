//! Markdown document publication.
//!
//! Merges the rendered schedule table into a persisted markdown document:
//! everything through the marker line is preserved, the section below it
//! is replaced by a `Last updated:` stamp and the table. A document
//! without the marker (or no document at all) gets the section appended.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use super::ReportSink;
use crate::error::Result;

/// Marker line that delimits the schedule section.
pub const DEFAULT_MARKER: &str = "## Current Schedule";

/// Publishes the schedule table into a markdown file.
#[derive(Debug, Clone)]
pub struct MarkdownReportSink {
    path: PathBuf,
    marker: String,
}

impl MarkdownReportSink {
    /// Creates a sink writing to `path` with the default marker.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Overrides the marker line.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl ReportSink for MarkdownReportSink {
    fn publish(&mut self, table: &str, completed_at: NaiveDateTime) -> Result<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };

        let mut out = String::new();
        let mut found = false;
        for line in text.lines() {
            out.push_str(line);
            out.push('\n');
            if line.starts_with(&self.marker) {
                found = true;
                break;
            }
        }
        if !found {
            if !out.is_empty() && !out.ends_with("\n\n") {
                out.push('\n');
            }
            out.push_str(&self.marker);
            out.push('\n');
        }

        out.push_str(&format!(
            "Last updated: {}\n\n",
            completed_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(table);

        fs::write(&self.path, out)?;
        Ok(())
    }
}
