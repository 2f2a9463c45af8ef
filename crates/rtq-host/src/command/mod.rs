//! Subprocess-backed retarget executor.
//!
//! Runs the content application in background mode as a child process,
//! once per job. The command line is a template: `{action}`, `{preset}`,
//! `{rot_x}`, `{rot_y}` and `{rot_z}` are substituted from the
//! [`ExecuteRequest`](rtq_core::executor::ExecuteRequest) before spawning.
mod config;
pub use config::CommandConfig;

mod executor;
pub use executor::CommandExecutor;
