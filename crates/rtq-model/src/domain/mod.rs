mod identity;
pub use identity::EnvironmentId;

mod rotation;
pub use rotation::RotationEuler;

mod constants;
pub use constants::QUEUE_FILE_NAME;
