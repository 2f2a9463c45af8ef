//! Retarget executor seam.
//!
//! The actual transformation is an external collaborator: given a loaded
//! environment and the per-run parameters, it imports the action input,
//! normalizes the source rig and runs the retargeting operator sequence,
//! mutating the environment in place. This crate only cares about its
//! success or failure.
mod error;
pub use error::ExecutorError;

use std::path::PathBuf;

use async_trait::async_trait;

use rtq_model::RotationEuler;

/// Parameters for one retarget attempt against the loaded environment.
#[derive(Debug, Clone)]
pub struct ExecuteRequest {
    /// Action input file to import into the environment.
    pub action_input_path: PathBuf,
    /// Retarget preset identifier.
    pub preset: String,
    /// Rotation correction for the imported source armature, in degrees.
    pub rotation: RotationEuler,
}

/// External collaborator performing the domain transformation.
///
/// Executed at most once per job: a failure is reported, logged and the
/// job is abandoned, never retried.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    /// Run the transformation against whatever environment is loaded.
    async fn execute(&self, request: &ExecuteRequest) -> Result<(), ExecutorError>;

    /// Executor name used in logs and metrics labels.
    fn name(&self) -> &'static str;
}
