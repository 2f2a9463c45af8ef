//! Metrics collection abstraction for batch runs.
//!
//! Metrics backends (prometheus, statsd, etc) implement [`MetricsBackend`]
//! and are injected into the resume driver; the default is a no-op.
mod backend;
pub use backend::{JobOutcome, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
