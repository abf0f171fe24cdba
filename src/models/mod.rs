//! Scheduling domain models.
//!
//! Core data types of a scheduling run: the discrete day
//! ([`TimeGrid`]), the roster ([`Person`]), the meeting requests
//! ([`Request`]), and the shared free/busy state the allocator consults
//! and mutates ([`AvailabilityBoard`]).
//!
//! # Ownership
//! Each person's availability vector is exclusively owned by the
//! [`AvailabilityBoard`] and accessed by person id; there is no shared
//! or aliased per-person state anywhere else in the crate.

mod availability;
mod grid;
mod person;
mod request;

pub use availability::AvailabilityBoard;
pub use grid::{TimeGrid, DEFAULT_SLOT_WIDTH_MIN, SKIP_SENTINEL};
pub use person::Person;
pub use request::{Request, RequestStatus, DEFAULT_DURATION_MIN};
