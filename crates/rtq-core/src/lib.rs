pub mod bootstrap;
pub mod enumerate;
pub mod error;
pub mod executor;
pub mod host;
pub mod metrics;
pub mod resume;
pub mod store;

pub use metrics::{JobOutcome, MetricsBackend, MetricsHandle};

pub mod prelude {
    pub use crate::bootstrap::start_batch;
    pub use crate::enumerate::enumerate_jobs;
    pub use crate::error::CoreError;
    pub use crate::executor::{ExecuteRequest, ExecutorError, TaskExecutor};
    pub use crate::host::{Host, HostError, HostEvent, HostEventKind, Subscribe};
    pub use crate::metrics::{JobOutcome, MetricsBackend, MetricsHandle};
    pub use crate::resume::{ResumeDriver, Step, resume_step};
    pub use crate::store::{QueueStore, StoreError};
}
