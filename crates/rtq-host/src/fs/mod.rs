//! Filesystem-backed host.
//!
//! Models the content-creation application faithfully enough to drive a
//! full batch: exactly one environment is held at a time, loading another
//! file replaces it wholesale, and completion is reported only through the
//! subscriber callback after the pump has processed the request — never
//! synchronously from `request_load`.
mod backend;
pub use backend::{FsHost, FsHostPump};
