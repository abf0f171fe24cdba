//! Request ordering for one allocation run.
//!
//! `Unscheduled` carry-overs from the previous cycle go first, in the
//! order the source delivered them; every other eligible request is
//! shuffled so no club is systematically favored across runs.
//! `Closed / Parked` requests are dropped.
//!
//! The random source is caller-supplied: production shuffles with system
//! entropy, tests with a seeded `SmallRng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Request, RequestStatus};

/// The ordered, priority-adjusted processing queue.
#[derive(Debug, Clone)]
pub struct RequestQueue {
    items: Vec<Request>,
}

impl RequestQueue {
    /// Builds the processing order for one run.
    pub fn build<R: Rng>(requests: Vec<Request>, rng: &mut R) -> Self {
        let mut carried = Vec::new();
        let mut fresh = Vec::new();
        for request in requests {
            match request.status {
                RequestStatus::Unscheduled => carried.push(request),
                RequestStatus::ToBeScheduled | RequestStatus::Scheduled => fresh.push(request),
                RequestStatus::ClosedParked => {}
            }
        }
        fresh.shuffle(rng);
        carried.extend(fresh);
        Self { items: carried }
    }

    /// A queue that processes requests exactly in the given order.
    /// Used when the ordering is decided elsewhere (fixtures, replays).
    pub fn from_ordered(requests: Vec<Request>) -> Self {
        Self { items: requests }
    }

    /// Number of queued requests.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the queue without consuming it.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.items.iter()
    }
}

impl IntoIterator for RequestQueue {
    type Item = Request;
    type IntoIter = std::vec::IntoIter<Request>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
