use std::path::{Path, PathBuf};

use rtq_model::{EnvironmentId, Job, Queue};

/// Decision taken by one resume cycle.
///
/// The four variants map onto the machine's states: `Deregister` is the
/// idle terminal (no run registered), `Complete` the draining terminal,
/// `Load` suspends the machine while awaiting an environment, and
/// `Execute` fires the front job against the already-correct environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// No queue record exists: no active run, stand down.
    Deregister,
    /// The record exists and is empty: delete it and finish the run.
    Complete,
    /// The front job needs a different environment loaded first.
    Load(PathBuf),
    /// The correct environment is loaded: attempt the front job.
    Execute(Job),
}

/// Pure decision function of the resume machine.
///
/// `record` is what [`crate::store::QueueStore::load`] returned for this
/// cycle and `current` is the host's currently loaded environment; nothing
/// else may influence the decision, because nothing else survives the
/// resets between cycles. Path comparison goes through [`EnvironmentId`]
/// so equivalent spellings never cause a reload loop.
pub fn resume_step(record: Option<&Queue>, current: Option<&Path>) -> Step {
    let Some(queue) = record else {
        return Step::Deregister;
    };
    let Some(job) = queue.front() else {
        return Step::Complete;
    };

    let matches = current
        .map(|path| EnvironmentId::from_path(path) == job.environment_id())
        .unwrap_or(false);

    if matches {
        Step::Execute(job.clone())
    } else {
        Step::Load(job.source_environment_path.clone())
    }
}
