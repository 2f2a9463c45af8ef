use std::fmt;

use rtq_core::executor::ExecuteRequest;

use crate::BackendError;

/// Command-line template for the retarget subprocess.
#[derive(Debug, Clone)]
pub struct CommandConfig {
    /// Program to execute (e.g. the content application binary).
    pub program: String,
    /// Argument template; placeholders are substituted per job.
    pub args: Vec<String>,
}

impl CommandConfig {
    /// Validate the configuration before any job runs.
    ///
    /// Rules:
    /// - `program` is not empty or whitespace-only;
    /// - the template references `{action}` at least once, otherwise every
    ///   job would run the identical command.
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.program.trim().is_empty() {
            return Err(BackendError::InvalidConfig("program is empty".into()));
        }
        if !self.args.iter().any(|a| a.contains("{action}")) {
            return Err(BackendError::InvalidConfig(
                "argument template never references {action}".into(),
            ));
        }
        Ok(())
    }

    /// Substitute the placeholders for one request.
    pub fn resolve_args(&self, request: &ExecuteRequest) -> Vec<String> {
        let action = request.action_input_path.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{action}", &action)
                    .replace("{preset}", &request.preset)
                    .replace("{rot_x}", &request.rotation.x.to_string())
                    .replace("{rot_y}", &request.rotation.y.to_string())
                    .replace("{rot_z}", &request.rotation.z.to_string())
            })
            .collect()
    }
}

impl fmt::Display for CommandConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CommandConfig(program='{}', args={})",
            self.program,
            self.args.len()
        )
    }
}
