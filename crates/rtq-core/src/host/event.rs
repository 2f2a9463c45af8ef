use std::path::PathBuf;

/// What kind of host transition completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEventKind {
    /// A requested environment finished loading.
    LoadCompleted,
    /// The host finished resetting to a neutral, empty environment.
    ResetCompleted,
}

/// Event delivered to subscribers after the host finishes any load.
///
/// Everything a subscriber knew before this event must be treated as gone:
/// the load that produced it destroyed all prior in-process state. The
/// event carries only what the host itself still knows.
#[derive(Debug, Clone)]
pub struct HostEvent {
    pub kind: HostEventKind,
    /// Path of the environment that was loaded; `None` after a reset.
    pub path: Option<PathBuf>,
}

impl HostEvent {
    /// Event for a completed load of `path`.
    pub fn load_completed(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: HostEventKind::LoadCompleted,
            path: Some(path.into()),
        }
    }

    /// Event for a completed neutral reset.
    pub fn reset_completed() -> Self {
        Self {
            kind: HostEventKind::ResetCompleted,
            path: None,
        }
    }
}
