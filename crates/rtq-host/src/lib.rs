mod error;
pub use error::BackendError;

pub mod fs;
pub use fs::{FsHost, FsHostPump};

#[cfg(feature = "command")]
pub mod command;
#[cfg(feature = "command")]
pub use command::{CommandConfig, CommandExecutor};
