//! Batch bootstrap: the single transition from "nothing" into the resume
//! cycle.
//!
//! Everything after this point is driven by host load-completion events;
//! bootstrap only enumerates, persists the full queue and issues the very
//! first load.
use std::sync::Arc;

use tracing::info;

use rtq_model::BatchSpec;

use crate::{
    enumerate::enumerate_jobs,
    error::CoreError,
    host::Host,
    resume::ResumeDriver,
    store::QueueStore,
};

/// Enumerate the run, persist the queue and enter the resume cycle.
///
/// Order matters: the driver is registered before the first load is
/// issued, so the load-completion event can never be missed. If the first
/// job's environment is rejected outright, a neutral reset is requested
/// instead; the driver's first cycle then applies its usual
/// skip-and-continue handling.
///
/// On [`CoreError::EmptyInputSet`] nothing has been written: no queue
/// record, no output directory, no registration.
pub fn start_batch(
    spec: &BatchSpec,
    store: &QueueStore,
    host: &Arc<dyn Host>,
    driver: Arc<ResumeDriver>,
) -> Result<(), CoreError> {
    let queue = enumerate_jobs(spec)?;
    store.save(&queue)?;

    host.register(driver);

    let first = queue
        .front()
        .expect("enumeration never yields an empty queue");
    info!(
        jobs = queue.len(),
        first = %first.source_environment_path.display(),
        record = %store.path().display(),
        "batch started",
    );

    if host.request_load(&first.source_environment_path).is_err() {
        // Let the driver skip it like any other rejected environment.
        host.request_reset()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{ExecuteRequest, ExecutorError, TaskExecutor};
    use crate::host::{HostError, Subscribe};

    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rtq_model::RotationEuler;

    #[derive(Default)]
    struct StubHost {
        registered: Mutex<Vec<&'static str>>,
        loads: Mutex<Vec<PathBuf>>,
        resets: Mutex<u32>,
        reject_all_loads: bool,
    }

    impl Host for StubHost {
        fn current_environment(&self) -> Option<PathBuf> {
            None
        }

        fn request_load(&self, path: &Path) -> Result<(), HostError> {
            if self.reject_all_loads {
                return Err(HostError::NotFound(path.to_path_buf()));
            }
            self.loads.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn request_reset(&self) -> Result<(), HostError> {
            *self.resets.lock().unwrap() += 1;
            Ok(())
        }

        fn save_environment(&self, _path: &Path) -> Result<(), HostError> {
            Ok(())
        }

        fn register(&self, subscriber: Arc<dyn Subscribe>) {
            self.registered.lock().unwrap().push(subscriber.name());
        }

        fn deregister(&self, _name: &str) {}
    }

    struct NullExecutor;

    #[async_trait]
    impl TaskExecutor for NullExecutor {
        async fn execute(&self, _request: &ExecuteRequest) -> Result<(), ExecutorError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "null"
        }
    }

    fn mk_spec(root: &Path) -> BatchSpec {
        BatchSpec {
            characters_dir: root.join("chars"),
            actions_dir: root.join("actions"),
            output_dir: root.join("out"),
            environment_suffix: "blend".into(),
            action_suffix: "fbx".into(),
            preset: "preset".into(),
            rotation: RotationEuler::ZERO,
        }
    }

    fn setup(root: &Path, characters: &[&str], actions: &[&str]) {
        std::fs::create_dir_all(root.join("chars")).unwrap();
        std::fs::create_dir_all(root.join("actions")).unwrap();
        for c in characters {
            std::fs::write(root.join("chars").join(c), b"x").unwrap();
        }
        for a in actions {
            std::fs::write(root.join("actions").join(a), b"x").unwrap();
        }
    }

    fn mk_driver(store: &QueueStore, host: &Arc<dyn Host>, spec: &BatchSpec) -> Arc<ResumeDriver> {
        Arc::new(ResumeDriver::new(
            store.clone(),
            Arc::clone(host),
            Arc::new(NullExecutor),
            spec,
        ))
    }

    #[test]
    fn start_persists_queue_registers_and_loads_first() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend", "B.blend"], &["X.fbx"]);
        let spec = mk_spec(dir.path());
        let store = QueueStore::in_dir(dir.path().join("out"));

        let stub = Arc::new(StubHost::default());
        let host: Arc<dyn Host> = Arc::clone(&stub) as Arc<dyn Host>;
        let driver = mk_driver(&store, &host, &spec);

        // store lives inside the output dir; created by enumeration
        start_batch(&spec, &store, &host, driver).unwrap();

        let queue = store.load().unwrap().expect("record must exist");
        assert_eq!(queue.len(), 2);
        assert_eq!(*stub.registered.lock().unwrap(), vec!["resume-driver"]);

        let loads = stub.loads.lock().unwrap();
        assert_eq!(loads.len(), 1);
        assert!(loads[0].ends_with("A.blend"));
    }

    #[test]
    fn empty_input_set_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend"], &[]);
        let spec = mk_spec(dir.path());
        let store = QueueStore::in_dir(dir.path().join("out"));

        let stub = Arc::new(StubHost::default());
        let host: Arc<dyn Host> = Arc::clone(&stub) as Arc<dyn Host>;
        let driver = mk_driver(&store, &host, &spec);

        let err = start_batch(&spec, &store, &host, driver).unwrap_err();
        assert!(matches!(err, CoreError::EmptyInputSet { .. }));
        assert!(!store.path().exists());
        assert!(stub.registered.lock().unwrap().is_empty());
        assert!(stub.loads.lock().unwrap().is_empty());
    }

    #[test]
    fn rejected_first_load_falls_back_to_reset() {
        let dir = tempfile::tempdir().unwrap();
        setup(dir.path(), &["A.blend"], &["X.fbx"]);
        let spec = mk_spec(dir.path());
        let store = QueueStore::in_dir(dir.path().join("out"));

        let stub = Arc::new(StubHost {
            reject_all_loads: true,
            ..Default::default()
        });
        let host: Arc<dyn Host> = Arc::clone(&stub) as Arc<dyn Host>;
        let driver = mk_driver(&store, &host, &spec);

        start_batch(&spec, &store, &host, driver).unwrap();
        assert_eq!(*stub.resets.lock().unwrap(), 1);
    }
}
