use std::sync::atomic::{AtomicU64, Ordering};

/// Global monotonically increasing sequence for resume-cycle identifiers.
///
/// Local to the current process; cycles from a restarted process start
/// counting again, which is fine since the id only correlates log lines
/// within one invocation.
static CYCLE_SEQ: AtomicU64 = AtomicU64::new(1);

/// Returns next numeric sequence value.
fn next_seq() -> u64 {
    CYCLE_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Build a human-readable id for one resume cycle.
///
/// Format: `cycle-{seq:x}`.
pub fn make_cycle_id() -> String {
    format!("cycle-{seq:x}", seq = next_seq())
}
