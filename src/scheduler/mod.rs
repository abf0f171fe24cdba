//! Queue ordering and greedy allocation.
//!
//! # Algorithm
//!
//! [`RequestQueue`] decides the processing order: unscheduled carry-overs
//! first, everything else shuffled. [`Allocator`] then places each
//! request into the earliest contiguous block of slots where every
//! assignee is simultaneously free — a fast first-fit heuristic, not an
//! optimal assignment.

mod allocator;
mod queue;

pub use allocator::{Allocator, Placement, RunSummary};
pub use queue::RequestQueue;
