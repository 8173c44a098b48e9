use crate::modules::appointments::core::outcome::DeliveryOutcome;
use crate::modules::appointments::use_cases::submit_appointment::handler::SubmissionReceipt;
use crate::modules::appointments::use_cases::submit_appointment::pipeline::ChannelAttempt;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "ChannelAttempt")]
pub struct AttemptView {
    pub channel: String,
    /// `dispatched` for background channels.
    pub outcome: String,
    pub reason: Option<String>,
}

impl From<&ChannelAttempt> for AttemptView {
    fn from(attempt: &ChannelAttempt) -> Self {
        let (outcome, reason) = match &attempt.outcome {
            None => ("dispatched", None),
            Some(DeliveryOutcome::Rejected(reason)) => ("rejected", Some(reason.to_string())),
            Some(outcome) => (outcome.as_str(), None),
        };
        Self {
            channel: attempt.channel.to_string(),
            outcome: outcome.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, async_graphql::SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "SubmissionResult")]
pub struct SubmissionView {
    pub state: String,
    pub message: String,
    pub confirmed: bool,
    pub handoff_url: Option<String>,
    pub statuses: Vec<String>,
    pub attempts: Vec<AttemptView>,
}

impl From<SubmissionReceipt> for SubmissionView {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            state: receipt.terminal.state.as_str().to_string(),
            message: receipt.terminal.message,
            confirmed: receipt.terminal.confirmed,
            handoff_url: receipt.handoff_url,
            statuses: receipt.statuses.into_iter().map(|s| s.message).collect(),
            attempts: receipt.terminal.attempts.iter().map(AttemptView::from).collect(),
        }
    }
}
