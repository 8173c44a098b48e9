// Channels never return errors; every failure becomes a DeliveryOutcome.

use crate::modules::appointments::core::outcome::DeliveryOutcome;
use crate::modules::appointments::core::record::AppointmentRecord;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Awaited in order; its outcome decides whether the pipeline stops.
    Blocking,
    /// Spawned and never awaited; its outcome only reaches the log.
    Background,
}

#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    fn name(&self) -> &'static str;

    fn mode(&self) -> DispatchMode {
        DispatchMode::Blocking
    }

    /// Status shown when the pipeline falls back to this channel.
    fn fallback_notice(&self) -> &'static str {
        "Trying another way to send your request..."
    }

    async fn attempt(&self, record: &AppointmentRecord) -> DeliveryOutcome;
}
