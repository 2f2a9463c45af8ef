use std::sync::Arc;

/// How a job attempt ended, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// Executor succeeded and the output was persisted.
    Success,
    /// Executor or output persistence failed; the job was abandoned.
    Failure,
    /// The job's source environment could not be loaded; never executed.
    Skipped,
}

impl JobOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            JobOutcome::Success => "success",
            JobOutcome::Failure => "failure",
            JobOutcome::Skipped => "skipped",
        }
    }
}

/// Backend metrics collection interface.
///
/// One attempt per job means started/completed counters differ only by the
/// jobs skipped before execution.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record that a job attempt began executing.
    ///
    /// # Arguments
    /// - `executor`: TaskExecutor implementation name
    fn record_job_started(&self, executor: &str);

    /// Record the end of a job attempt.
    ///
    /// # Arguments
    /// - `executor`: TaskExecutor implementation name
    /// - `outcome`: how the attempt ended
    /// - `duration_ms`: attempt duration (0 for skipped jobs)
    fn record_job_completed(&self, executor: &str, outcome: JobOutcome, duration_ms: u64);

    /// Record a host-level error observed by the driver.
    ///
    /// Separate from job failures: these are load/save/reset rejections.
    ///
    /// # Arguments
    /// - `kind`: error category (e.g. "load_rejected", "reset_failed")
    fn record_host_error(&self, kind: &str);
}

/// Shared handle to a metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
