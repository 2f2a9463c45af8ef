use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::EnvironmentId;

/// One unit of work: retarget a single action onto a single character.
///
/// Identity is the three paths; a job is immutable once enqueued and is
/// removed from the queue exactly once per processing attempt. Field names
/// are part of the durable record format and must stay stable so that a
/// half-finished run remains human-inspectable and hand-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Character environment file the host must load before this job runs.
    pub source_environment_path: PathBuf,
    /// Action input file handed to the executor.
    pub action_input_path: PathBuf,
    /// Where the transformed environment is persisted on success.
    pub output_path: PathBuf,
}

impl Job {
    /// Create a job from its three paths.
    pub fn new(
        source_environment_path: impl Into<PathBuf>,
        action_input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_environment_path: source_environment_path.into(),
            action_input_path: action_input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Normalized identity of the environment this job needs loaded.
    pub fn environment_id(&self) -> EnvironmentId {
        EnvironmentId::from_path(&self.source_environment_path)
    }

    /// Returns `true` if `current` is the environment this job needs.
    pub fn matches_environment(&self, current: &Path) -> bool {
        self.environment_id() == EnvironmentId::from_path(current)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job({} + {} -> {})",
            self.source_environment_path.display(),
            self.action_input_path.display(),
            self.output_path.display(),
        )
    }
}
