mod domain;
pub use domain::QUEUE_FILE_NAME;
pub use domain::{EnvironmentId, RotationEuler};

mod error;
pub use error::{ModelError, ModelResult};

mod job;
pub use job::Job;

mod queue;
pub use queue::Queue;

mod spec;
pub use spec::BatchSpec;
