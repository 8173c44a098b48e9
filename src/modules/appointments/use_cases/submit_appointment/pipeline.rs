// Walks the configured channels until one accepts the handoff.

use crate::modules::appointments::core::channel::{DeliveryChannel, DispatchMode};
use crate::modules::appointments::core::outcome::{DeliveryOutcome, RejectionReason};
use crate::modules::appointments::core::record::AppointmentRecord;
use crate::modules::appointments::use_cases::submit_appointment::status::{
    COULD_NOT_SEND, PREPARING, PipelineState, REQUEST_SENT, REQUEST_SUBMITTED, StatusSink,
    StatusUpdate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("all delivery channels exhausted")]
    AllChannelsExhausted { last: Option<RejectionReason> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAttempt {
    pub channel: &'static str,
    /// `None` for background channels, whose outcome is never awaited.
    pub outcome: Option<DeliveryOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStatus {
    pub state: PipelineState,
    pub message: String,
    /// Only true when a channel reported `Delivered`.
    pub confirmed: bool,
    pub attempts: Vec<ChannelAttempt>,
    pub failure: Option<PipelineError>,
}

impl TerminalStatus {
    pub fn succeeded(&self) -> bool {
        self.state == PipelineState::Succeeded
    }
}

pub struct SubmissionPipeline {
    channels: Vec<Arc<dyn DeliveryChannel>>,
}

impl SubmissionPipeline {
    pub fn new(channels: Vec<Arc<dyn DeliveryChannel>>) -> Self {
        Self { channels }
    }

    pub async fn submit(
        &self,
        record: AppointmentRecord,
        status: &mut dyn StatusSink,
    ) -> TerminalStatus {
        let mut state = PipelineState::Idle;
        advance(&mut state, PipelineState::Submitting, PREPARING, status);

        let mut attempts = Vec::with_capacity(self.channels.len());
        let mut last_rejection: Option<RejectionReason> = None;

        for channel in &self.channels {
            if channel.mode() == DispatchMode::Background {
                dispatch_in_background(channel.clone(), record.clone());
                attempts.push(ChannelAttempt {
                    channel: channel.name(),
                    outcome: None,
                });
                continue;
            }

            let is_fallback = last_rejection.is_some();
            if is_fallback {
                advance(
                    &mut state,
                    PipelineState::Submitting,
                    channel.fallback_notice(),
                    status,
                );
            }

            let outcome = channel.attempt(&record).await;
            attempts.push(ChannelAttempt {
                channel: channel.name(),
                outcome: Some(outcome.clone()),
            });

            let confirmed = match outcome {
                DeliveryOutcome::Delivered => true,
                DeliveryOutcome::Indeterminate => false,
                DeliveryOutcome::Rejected(reason) => {
                    warn!(channel = channel.name(), %reason, "delivery channel rejected, falling through");
                    last_rejection = Some(reason);
                    continue;
                }
            };

            let message = match (is_fallback, confirmed) {
                (true, _) => channel.fallback_notice(),
                (false, true) => REQUEST_SENT,
                (false, false) => REQUEST_SUBMITTED,
            };
            info!(channel = channel.name(), confirmed, "appointment request handed off");
            advance(&mut state, PipelineState::Succeeded, message, status);
            return TerminalStatus {
                state,
                message: message.to_string(),
                confirmed,
                attempts,
                failure: None,
            };
        }

        warn!(last = ?last_rejection, "every delivery channel was exhausted");
        advance(&mut state, PipelineState::Failed, COULD_NOT_SEND, status);
        TerminalStatus {
            state,
            message: COULD_NOT_SEND.to_string(),
            confirmed: false,
            attempts,
            failure: Some(PipelineError::AllChannelsExhausted {
                last: last_rejection,
            }),
        }
    }
}

fn advance(
    state: &mut PipelineState,
    next: PipelineState,
    message: &str,
    status: &mut dyn StatusSink,
) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal pipeline transition {state:?} -> {next:?}"
    );
    *state = next;
    status.emit(StatusUpdate {
        state: next,
        message: message.to_string(),
    });
}

fn dispatch_in_background(channel: Arc<dyn DeliveryChannel>, record: AppointmentRecord) {
    let name = channel.name();
    debug!(channel = name, "dispatching background channel");
    tokio::spawn(
        async move {
            match channel.attempt(&record).await {
                DeliveryOutcome::Rejected(reason) => {
                    warn!(channel = name, %reason, "background channel rejected")
                }
                outcome => debug!(channel = name, outcome = outcome.as_str(), "background channel finished"),
            }
        }
        .instrument(tracing::Span::current()),
    );
}
