// Scripted delivery channel for pipeline tests.

use crate::modules::appointments::core::channel::{DeliveryChannel, DispatchMode};
use crate::modules::appointments::core::outcome::DeliveryOutcome;
use crate::modules::appointments::core::record::AppointmentRecord;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Attempt order shared by every channel of one test.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn record(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

pub struct ScriptedChannel {
    name: &'static str,
    mode: DispatchMode,
    outcome: DeliveryOutcome,
    notice: &'static str,
    delay: Option<Duration>,
    started: Option<Arc<Notify>>,
    calls: CallLog,
}

#[allow(dead_code)]
impl ScriptedChannel {
    pub fn new(name: &'static str, outcome: DeliveryOutcome, calls: &CallLog) -> Self {
        Self {
            name,
            mode: DispatchMode::Blocking,
            outcome,
            notice: "Trying another way to send your request...",
            delay: None,
            started: None,
            calls: calls.clone(),
        }
    }

    pub fn background(mut self) -> Self {
        self.mode = DispatchMode::Background;
        self
    }

    pub fn notice(mut self, notice: &'static str) -> Self {
        self.notice = notice;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn notify_on_start(mut self, started: Arc<Notify>) -> Self {
        self.started = Some(started);
        self
    }

    pub fn into_arc(self) -> Arc<dyn DeliveryChannel> {
        Arc::new(self)
    }
}

#[async_trait]
impl DeliveryChannel for ScriptedChannel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn mode(&self) -> DispatchMode {
        self.mode
    }

    fn fallback_notice(&self) -> &'static str {
        self.notice
    }

    async fn attempt(&self, _record: &AppointmentRecord) -> DeliveryOutcome {
        self.calls.record(self.name);
        if let Some(started) = &self.started {
            started.notify_one();
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}
