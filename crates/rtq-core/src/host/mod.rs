//! Host application seam.
//!
//! The host owns exactly one environment at a time. Loading another file
//! replaces it wholesale, destroying all in-process state of whatever was
//! driving the host; completion is reported asynchronously through the
//! [`Subscribe`] callback, never through the return path of the request.
mod error;
pub use error::HostError;

mod event;
pub use event::{HostEvent, HostEventKind};

mod subscribe;
pub use subscribe::Subscribe;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Content-creation host wrapper.
///
/// Implementations wrap the host's load/save primitives and its
/// load-completion callback registry. The contract every caller relies on:
///
/// - [`Host::request_load`] and [`Host::request_reset`] only *queue* the
///   transition; a successful return means "accepted", not "done". The
///   transition completes by invoking every registered subscriber.
/// - An error return means the transition was rejected synchronously and
///   no event will fire for it.
/// - [`Host::save_environment`] persists the currently loaded environment
///   verbatim and returns synchronously.
pub trait Host: Send + Sync {
    /// Path of the environment the host currently has loaded, if any.
    fn current_environment(&self) -> Option<PathBuf>;

    /// Queue a load of `path` as the new environment.
    fn request_load(&self, path: &Path) -> Result<(), HostError>;

    /// Queue a reset to a neutral, empty environment.
    fn request_reset(&self) -> Result<(), HostError>;

    /// Persist the currently loaded environment to `path`.
    fn save_environment(&self, path: &Path) -> Result<(), HostError>;

    /// Register a load-completion subscriber.
    fn register(&self, subscriber: Arc<dyn Subscribe>);

    /// Remove the subscriber with the given name; unknown names are a no-op.
    fn deregister(&self, name: &str);
}
