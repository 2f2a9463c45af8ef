//! Resume state machine: a persisted continuation over host resets.
//!
//! Every load issued to the host destroys the in-process world, so the
//! machine is split into a pure decision function ([`resume_step`]) whose
//! whole input is re-read from durable storage and the host, and a thin
//! shell ([`ResumeDriver`]) that performs the load/execute side effects.
mod step;
pub use step::{Step, resume_step};

mod id;
pub use id::make_cycle_id;

mod driver;
pub use driver::{RESUME_DRIVER_NAME, ResumeDriver};
