use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use rtq_model::{BatchSpec, Queue, RotationEuler};

use crate::{
    executor::{ExecuteRequest, TaskExecutor},
    host::{Host, HostEvent, Subscribe},
    metrics::{JobOutcome, MetricsHandle, noop_metrics},
    resume::{Step, make_cycle_id, resume_step},
    store::QueueStore,
};

/// Name under which the driver registers with the host.
pub const RESUME_DRIVER_NAME: &str = "resume-driver";

/// Side-effecting shell of the resume state machine.
///
/// Registered with the host as a load-completion subscriber; every
/// invocation is fresh and recovers its entire state from the queue store
/// and the host. One invocation always runs to completion (including its
/// save) before the host can deliver the next event, so the store has a
/// single writer by construction.
///
/// Failure policy:
/// - executor or output-save failure: the job is popped and the run
///   continues (at most one attempt, no retry);
/// - rejected source-environment load: the job is skipped the same way;
/// - unreadable queue record, failed record save or failed neutral reset:
///   the run halts and the record is left on disk for inspection.
pub struct ResumeDriver {
    store: QueueStore,
    host: Arc<dyn Host>,
    executor: Arc<dyn TaskExecutor>,
    preset: String,
    rotation: RotationEuler,
    metrics: MetricsHandle,
    done: CancellationToken,
}

impl ResumeDriver {
    /// Create a driver for the given run with no-op metrics.
    pub fn new(
        store: QueueStore,
        host: Arc<dyn Host>,
        executor: Arc<dyn TaskExecutor>,
        spec: &BatchSpec,
    ) -> Self {
        Self {
            store,
            host,
            executor,
            preset: spec.preset.clone(),
            rotation: spec.rotation,
            metrics: noop_metrics(),
            done: CancellationToken::new(),
        }
    }

    /// Replace the metrics backend and return the updated driver.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Token cancelled once the driver reaches a terminal state.
    ///
    /// Fires on run completion as well as on a halt; the queue record on
    /// disk distinguishes the two afterwards.
    pub fn done(&self) -> CancellationToken {
        self.done.clone()
    }

    /// Deregister from the host and release anyone waiting on [`Self::done`].
    fn stop(&self) {
        self.host.deregister(RESUME_DRIVER_NAME);
        self.done.cancel();
    }

    async fn run_cycle(&self, cycle: &str) {
        let record = match self.store.load() {
            Ok(record) => record,
            Err(e) => {
                error!(cycle, error = %e, "queue record unreadable; halting without touching it");
                self.stop();
                return;
            }
        };

        let current = self.host.current_environment();
        match resume_step(record.as_ref(), current.as_deref()) {
            Step::Deregister => {
                info!(cycle, "no queue record; no active run");
                self.stop();
            }
            Step::Complete => {
                info!(cycle, "queue drained; run complete");
                if let Err(e) = self.store.delete() {
                    error!(cycle, error = %e, "failed to delete drained queue record");
                }
                self.host.deregister(RESUME_DRIVER_NAME);
                // Neutral final load so the host is not left on the last output.
                if let Err(e) = self.host.request_reset() {
                    debug!(cycle, error = %e, "final neutral reset rejected");
                }
                self.done.cancel();
            }
            Step::Load(path) => {
                debug!(cycle, target = %path.display(), "front job needs its environment");
                // advance() re-derives the front and handles rejected loads.
                let mut queue = record.expect("Load step implies a record");
                self.advance(&mut queue, cycle);
            }
            Step::Execute(job) => {
                let mut queue = record.expect("Execute step implies a record");
                let outcome = self.execute_front(&job, cycle).await;
                self.metrics
                    .record_job_completed(self.executor.name(), outcome.0, outcome.1);

                // The pop-and-save is the only mutation that advances
                // progress and must land before any further load is issued.
                queue.pop_front();
                if let Err(e) = self.store.save(&queue) {
                    error!(cycle, error = %e, "failed to persist popped queue; halting");
                    self.stop();
                    return;
                }
                self.advance(&mut queue, cycle);
            }
        }
    }

    /// Run the executor against the loaded environment and persist the
    /// output on success. Never fails the run.
    async fn execute_front(&self, job: &rtq_model::Job, cycle: &str) -> (JobOutcome, u64) {
        let request = ExecuteRequest {
            action_input_path: job.action_input_path.clone(),
            preset: self.preset.clone(),
            rotation: self.rotation,
        };

        info!(cycle, %job, "executing job");
        self.metrics.record_job_started(self.executor.name());
        let started = Instant::now();

        let outcome = match self.executor.execute(&request).await {
            Ok(()) => match self.host.save_environment(&job.output_path) {
                Ok(()) => {
                    info!(cycle, output = %job.output_path.display(), "job output persisted");
                    JobOutcome::Success
                }
                Err(e) => {
                    warn!(cycle, %job, error = %e, "output save failed; job abandoned");
                    JobOutcome::Failure
                }
            },
            Err(e) => {
                warn!(cycle, %job, error = %e, "executor failed; job abandoned");
                JobOutcome::Failure
            }
        };
        (outcome, started.elapsed().as_millis() as u64)
    }

    /// Issue the load that re-triggers the cycle for the current front job,
    /// or the neutral reset when the queue is empty.
    ///
    /// A rejected load is the per-job skip path: the job is popped and
    /// persisted like any other attempt, and the next front is tried. The
    /// queue passed in must already be persisted.
    fn advance(&self, queue: &mut Queue, cycle: &str) {
        loop {
            let Some(job) = queue.front() else {
                if let Err(e) = self.host.request_reset() {
                    error!(cycle, error = %e, "neutral reset rejected; halting run");
                    self.metrics.record_host_error("reset_failed");
                    self.stop();
                }
                return;
            };

            match self.host.request_load(&job.source_environment_path) {
                Ok(()) => return,
                Err(e) => {
                    warn!(cycle, %job, error = %e, "source environment rejected; skipping job");
                    self.metrics.record_host_error("load_rejected");
                    self.metrics
                        .record_job_completed(self.executor.name(), JobOutcome::Skipped, 0);

                    queue.pop_front();
                    if let Err(e) = self.store.save(queue) {
                        error!(cycle, error = %e, "failed to persist skipped queue; halting");
                        self.stop();
                        return;
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Subscribe for ResumeDriver {
    async fn on_event(&self, event: &HostEvent) {
        let cycle = make_cycle_id();
        debug!(cycle, kind = ?event.kind, path = ?event.path, "resume cycle begins");
        self.run_cycle(&cycle).await;
    }

    fn name(&self) -> &'static str {
        RESUME_DRIVER_NAME
    }
}
