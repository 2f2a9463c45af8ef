//! Prometheus metrics backend for the batch retarget runtime.
//!
//! [`PrometheusMetrics`] implements [`rtq_core::MetricsBackend`]; exposition
//! is left to the embedding application, which calls
//! [`PrometheusMetrics::gather`] from whatever endpoint it already serves.
//!
//! ## Metrics
//! - `rtq_jobs_started_total{executor}` - Counter
//! - `rtq_jobs_completed_total{executor, outcome}` - Counter
//! - `rtq_job_duration_seconds{executor}` - Histogram
//! - `rtq_host_errors_total{kind}` - Counter

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
