use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use rtq_core::host::{Host, HostError, HostEvent, Subscribe};

/// The single environment the host holds, loaded bytes and all.
struct Environment {
    path: PathBuf,
    bytes: Vec<u8>,
}

/// State shared between the host handle and its pump.
struct HostState {
    environment: Mutex<Option<Environment>>,
    subscribers: Mutex<Vec<Arc<dyn Subscribe>>>,
}

enum HostCommand {
    Load(PathBuf),
    Reset,
}

/// Filesystem-backed [`Host`].
///
/// `request_load`/`request_reset` only queue the transition; the
/// [`FsHostPump`] performs it and then invokes every registered subscriber.
/// A load validates the target's existence synchronously so a missing file
/// is rejected on the request path rather than silently stalling the
/// resume cycle.
pub struct FsHost {
    state: Arc<HostState>,
    commands: mpsc::UnboundedSender<HostCommand>,
}

impl FsHost {
    /// Create a host handle and the pump that services it.
    ///
    /// The pump must be driven (see [`FsHostPump::run`]) for any load to
    /// ever complete.
    pub fn new() -> (Self, FsHostPump) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = Arc::new(HostState {
            environment: Mutex::new(None),
            subscribers: Mutex::new(Vec::new()),
        });
        let host = Self {
            state: Arc::clone(&state),
            commands: tx,
        };
        let pump = FsHostPump { state, commands: rx };
        (host, pump)
    }

    fn send(&self, command: HostCommand) -> Result<(), HostError> {
        self.commands
            .send(command)
            .map_err(|_| HostError::Backend("host pump has stopped".to_string()))
    }
}

impl Host for FsHost {
    fn current_environment(&self) -> Option<PathBuf> {
        self.state
            .environment
            .lock()
            .expect("environment lock poisoned")
            .as_ref()
            .map(|env| env.path.clone())
    }

    fn request_load(&self, path: &Path) -> Result<(), HostError> {
        if !path.is_file() {
            return Err(HostError::NotFound(path.to_path_buf()));
        }
        trace!(path = %path.display(), "load queued");
        self.send(HostCommand::Load(path.to_path_buf()))
    }

    fn request_reset(&self) -> Result<(), HostError> {
        trace!("reset queued");
        self.send(HostCommand::Reset)
    }

    fn save_environment(&self, path: &Path) -> Result<(), HostError> {
        let guard = self
            .state
            .environment
            .lock()
            .expect("environment lock poisoned");
        let Some(env) = guard.as_ref() else {
            return Err(HostError::NoEnvironment);
        };
        std::fs::write(path, &env.bytes).map_err(|e| HostError::SaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "environment saved");
        Ok(())
    }

    fn register(&self, subscriber: Arc<dyn Subscribe>) {
        let mut subs = self
            .state
            .subscribers
            .lock()
            .expect("subscribers lock poisoned");
        // one registration per name at a time
        subs.retain(|s| s.name() != subscriber.name());
        subs.push(subscriber);
    }

    fn deregister(&self, name: &str) {
        self.state
            .subscribers
            .lock()
            .expect("subscribers lock poisoned")
            .retain(|s| s.name() != name);
    }
}

/// Event pump for an [`FsHost`].
///
/// Processes queued transitions strictly in order; each transition
/// replaces the held environment and then dispatches the completion event
/// to a snapshot of the subscribers. Subscribers may queue further
/// transitions from inside `on_event` — they are handled on subsequent
/// iterations, which is what turns the resume handler into a cycle.
pub struct FsHostPump {
    state: Arc<HostState>,
    commands: mpsc::UnboundedReceiver<HostCommand>,
}

impl FsHostPump {
    /// Drive the pump until cancelled or until every host handle is gone.
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("host pump cancelled");
                    return;
                }
                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.handle(command).await,
                        None => {
                            debug!("all host handles dropped; pump exiting");
                            return;
                        }
                    }
                }
            }
        }
    }

    async fn handle(&self, command: HostCommand) {
        match command {
            HostCommand::Load(path) => match std::fs::read(&path) {
                Ok(bytes) => {
                    {
                        let mut guard = self
                            .state
                            .environment
                            .lock()
                            .expect("environment lock poisoned");
                        // the previous environment is gone entirely
                        *guard = Some(Environment {
                            path: path.clone(),
                            bytes,
                        });
                    }
                    debug!(path = %path.display(), "environment loaded");
                    self.dispatch(HostEvent::load_completed(path)).await;
                }
                Err(e) => {
                    // Validated at request time; only a race can get here.
                    // No event fires for a failed load.
                    warn!(path = %path.display(), error = %e, "queued load failed");
                }
            },
            HostCommand::Reset => {
                {
                    let mut guard = self
                        .state
                        .environment
                        .lock()
                        .expect("environment lock poisoned");
                    *guard = None;
                }
                debug!("environment reset");
                self.dispatch(HostEvent::reset_completed()).await;
            }
        }
    }

    async fn dispatch(&self, event: HostEvent) {
        let subscribers: Vec<Arc<dyn Subscribe>> = self
            .state
            .subscribers
            .lock()
            .expect("subscribers lock poisoned")
            .clone();
        for subscriber in subscribers {
            trace!(subscriber = subscriber.name(), kind = ?event.kind, "dispatching host event");
            subscriber.on_event(&event).await;
        }
    }
}
