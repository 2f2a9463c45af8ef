use std::sync::Arc;

use prometheus::{CounterVec, HistogramVec, Opts, Registry, proto::MetricFamily};

use rtq_core::{JobOutcome, MetricsBackend};

/// Prometheus metrics backend for batch runs.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `executor`: executor implementation names ("command", test doubles)
/// - `outcome`: "success", "failure", "skipped"
/// - `kind`: driver-side host error categories ("load_rejected",
///   "reset_failed")
#[derive(Clone)]
pub struct PrometheusMetrics {
    jobs_started: CounterVec,
    jobs_completed: CounterVec,
    job_duration: HistogramVec,
    host_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create the backend against a caller-provided registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let jobs_started = CounterVec::new(
            Opts::new("rtq_jobs_started_total", "Total number of job attempts"),
            &["executor"],
        )?;
        registry.register(Box::new(jobs_started.clone()))?;

        let jobs_completed = CounterVec::new(
            Opts::new(
                "rtq_jobs_completed_total",
                "Total number of job attempts finished, by outcome",
            ),
            &["executor", "outcome"],
        )?;
        registry.register(Box::new(jobs_completed.clone()))?;

        // retarget runs are dominated by host load time; buckets go long
        let job_duration = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "rtq_job_duration_seconds",
                "Job attempt duration in seconds",
            )
            .buckets(vec![0.1, 0.5, 1.0, 5.0, 15.0, 60.0, 180.0, 600.0]),
            &["executor"],
        )?;
        registry.register(Box::new(job_duration.clone()))?;

        let host_errors = CounterVec::new(
            Opts::new("rtq_host_errors_total", "Host errors observed by the driver"),
            &["kind"],
        )?;
        registry.register(Box::new(host_errors.clone()))?;

        Ok(Self {
            jobs_started,
            jobs_completed,
            job_duration,
            host_errors,
            registry,
        })
    }

    /// Create the backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Underlying registry, for registering further metrics alongside.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_job_started(&self, executor: &str) {
        self.jobs_started.with_label_values(&[executor]).inc();
    }

    fn record_job_completed(&self, executor: &str, outcome: JobOutcome, duration_ms: u64) {
        self.jobs_completed
            .with_label_values(&[executor, outcome.as_label()])
            .inc();

        self.job_duration
            .with_label_values(&[executor])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_host_error(&self, kind: &str) {
        self.host_errors.with_label_values(&[kind]).inc();
    }
}
