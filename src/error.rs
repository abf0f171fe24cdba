//! Scheduler error types.
//!
//! Two failure classes exist at run time. Data inconsistencies between
//! collaborators (`UnknownSlot`, `UnknownPerson`, `UnknownRequest`,
//! `InvalidGrid`) are fatal and abort the run. `InvalidDuration` is scoped
//! to a single request: the allocator rejects that request and continues.
//! Collaborator I/O failures propagate unchanged; the core never retries
//! a write and never rolls back in-memory state to compensate.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while scheduling or talking to collaborators.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A request's duration is zero or not a multiple of the slot width.
    /// Rejects the request instead of silently truncating its span.
    #[error("request '{id}': duration {minutes} min is not a positive multiple of the {slot_width} min slot width")]
    InvalidDuration {
        id: String,
        minutes: u32,
        slot_width: u32,
    },

    /// A slot identifier is not part of the time grid.
    #[error("unknown timeslot '{0}'")]
    UnknownSlot(String),

    /// Position arithmetic walked past the end of the grid.
    #[error("slot position {position} out of range: grid has {len} slots")]
    SlotOutOfRange { position: usize, len: usize },

    /// An assignee identifier has no row on the availability board.
    #[error("unknown person '{0}'")]
    UnknownPerson(String),

    /// A mutation referenced a request the board does not contain.
    #[error("unknown request '{0}'")]
    UnknownRequest(String),

    /// The slot list from the data source fails the grid invariants.
    #[error("invalid time grid: {0}")]
    InvalidGrid(String),

    /// Pre-run validation found fatal integrity problems.
    #[error("input validation failed with {count} error(s), first: {first}")]
    InvalidInput { count: usize, first: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("board document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
