use tracing::{debug, info};

pub const PREPARING: &str = "Preparing your request...";
pub const REQUEST_SENT: &str = "Request sent. We will contact you shortly.";
pub const REQUEST_SUBMITTED: &str = "Request submitted. We will contact you shortly.";
pub const COULD_NOT_SEND: &str = "Could not send your request. Please call the clinic.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl PipelineState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Submitting => "submitting",
            PipelineState::Succeeded => "succeeded",
            PipelineState::Failed => "failed",
        }
    }

    /// Submitting may repeat to announce a fallback; terminal states are final.
    pub const fn can_transition_to(&self, next: PipelineState) -> bool {
        matches!(
            (*self, next),
            (PipelineState::Idle, PipelineState::Submitting)
                | (PipelineState::Submitting, PipelineState::Submitting)
                | (PipelineState::Submitting, PipelineState::Succeeded)
                | (PipelineState::Submitting, PipelineState::Failed)
        )
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Succeeded | PipelineState::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub state: PipelineState,
    pub message: String,
}

/// Receives the user-facing status at every pipeline transition.
pub trait StatusSink: Send {
    fn emit(&mut self, update: StatusUpdate);
}

#[derive(Debug, Default)]
pub struct RecordingStatusSink {
    pub updates: Vec<StatusUpdate>,
}

impl RecordingStatusSink {
    pub fn messages(&self) -> Vec<&str> {
        self.updates.iter().map(|u| u.message.as_str()).collect()
    }
}

impl StatusSink for RecordingStatusSink {
    fn emit(&mut self, update: StatusUpdate) {
        if update.state.is_terminal() {
            info!(state = update.state.as_str(), message = %update.message, "submission finished");
        } else {
            debug!(state = update.state.as_str(), message = %update.message, "submission status");
        }
        self.updates.push(update);
    }
}
