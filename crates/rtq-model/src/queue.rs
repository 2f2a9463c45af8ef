use serde::{Deserialize, Serialize};

use crate::Job;

/// Ordered list of not-yet-completed jobs, front first.
///
/// The queue is fixed at enumeration time and only ever shrinks: nothing is
/// re-inserted, reordered or duplicated, so the durable record is always a
/// suffix of the originally enumerated sequence. Serialized as a
/// transparent JSON array of jobs.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue(Vec<Job>);

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a queue from an already ordered job list.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        Self(jobs)
    }

    /// The next job to attempt, if any.
    pub fn front(&self) -> Option<&Job> {
        self.0.first()
    }

    /// Remove and return the front job.
    ///
    /// This is the only mutation the runtime ever performs on a queue.
    pub fn pop_front(&mut self) -> Option<Job> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    /// Number of remaining jobs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no jobs remain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the remaining jobs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.0.iter()
    }
}
