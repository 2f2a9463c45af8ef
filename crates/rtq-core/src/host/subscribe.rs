use async_trait::async_trait;

use crate::host::HostEvent;

/// Load-completion callback registered with a host.
///
/// A subscriber is invoked fresh on every completed load with no retained
/// call-stack state; anything it needs across invocations must live in
/// durable storage. At most one subscriber per name is registered at a
/// time, and registration brackets a run: register before the first load,
/// deregister exactly once on the terminal transition.
#[async_trait]
pub trait Subscribe: Send + Sync {
    /// Handle one completed host transition.
    async fn on_event(&self, event: &HostEvent);

    /// Subscriber name used for deregistration and diagnostics.
    fn name(&self) -> &'static str;
}
