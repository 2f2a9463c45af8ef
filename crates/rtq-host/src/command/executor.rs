use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

use rtq_core::executor::{ExecuteRequest, ExecutorError, TaskExecutor};

use crate::BackendError;
use crate::command::CommandConfig;

/// [`TaskExecutor`] that spawns the configured program once per job.
///
/// Stdout is captured and drained to completion (content applications in
/// background mode are chatty; an unread pipe would block the child once
/// the buffer fills); stderr is inherited so the child's diagnostics land
/// in the service's own stream. A non-zero exit is a retarget failure;
/// failing to spawn or wait at all is an internal error.
pub struct CommandExecutor {
    config: CommandConfig,
}

impl CommandExecutor {
    /// Build an executor, rejecting an invalid command template up front.
    pub fn new(config: CommandConfig) -> Result<Self, BackendError> {
        config.validate()?;
        Ok(Self { config })
    }
}

#[async_trait]
impl TaskExecutor for CommandExecutor {
    async fn execute(&self, request: &ExecuteRequest) -> Result<(), ExecutorError> {
        let args = self.config.resolve_args(request);
        trace!(
            program = %self.config.program,
            args = ?args,
            "spawning retarget subprocess",
        );

        let mut cmd = Command::new(&self.config.program);
        cmd.args(&args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::inherit());

        // output() drains the stdout pipe while waiting; wait() alone would
        // deadlock against a child blocked on a full pipe buffer.
        let output = cmd
            .output()
            .await
            .map_err(|e| ExecutorError::Internal(format!("spawn failed: {e}")))?;

        let status = output.status;
        if status.success() {
            debug!(
                action = %request.action_input_path.display(),
                stdout_bytes = output.stdout.len(),
                "retarget subprocess exited successfully",
            );
            Ok(())
        } else if let Some(code) = status.code() {
            Err(ExecutorError::RetargetFailed(format!(
                "process exited with non-zero code: {code}"
            )))
        } else {
            Err(ExecutorError::RetargetFailed(
                "process terminated by signal".into(),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "command"
    }
}
