use crate::modules::appointments::adapters::outbound::channels::build_channels;
use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::modules::appointments::core::validate::{RawFields, ValidationError, validate};
use crate::modules::appointments::use_cases::submit_appointment::pipeline::{
    SubmissionPipeline, TerminalStatus,
};
use crate::modules::appointments::use_cases::submit_appointment::status::{
    RecordingStatusSink, StatusUpdate,
};
use crate::shared::config::BookingConfig;
use crate::shared::infrastructure::link_opener::LinkOpener;
use crate::shared::infrastructure::link_opener::in_memory::CollectingLinkOpener;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub type ChannelFactory =
    Arc<dyn Fn(Arc<dyn LinkOpener>) -> Vec<Arc<dyn DeliveryChannel>> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub terminal: TerminalStatus,
    pub statuses: Vec<StatusUpdate>,
    /// Deep link opened by the channel that took the request, if any.
    pub handoff_url: Option<String>,
}

pub struct SubmitAppointmentHandler {
    channel_factory: ChannelFactory,
}

impl SubmitAppointmentHandler {
    pub fn new(channel_factory: ChannelFactory) -> Self {
        Self { channel_factory }
    }

    pub fn from_config(config: BookingConfig, client: Client) -> Self {
        Self::new(Arc::new(move |opener: Arc<dyn LinkOpener>| {
            build_channels(&config, &client, opener)
        }))
    }

    #[tracing::instrument(name = "submit_appointment", skip_all, fields(submission_id = %Uuid::now_v7()))]
    pub async fn handle(&self, raw: &RawFields) -> Result<SubmissionReceipt, ValidationError> {
        let record = validate(raw).inspect_err(|error| {
            warn!(%error, "appointment request rejected by validation");
        })?;

        let opener = Arc::new(CollectingLinkOpener::new());
        let host: Arc<dyn LinkOpener> = opener.clone();
        let pipeline = SubmissionPipeline::new((self.channel_factory)(host));
        let mut statuses = RecordingStatusSink::default();
        let terminal = pipeline.submit(record, &mut statuses).await;
        info!(
            state = terminal.state.as_str(),
            confirmed = terminal.confirmed,
            "appointment submission finished"
        );

        Ok(SubmissionReceipt {
            terminal,
            statuses: statuses.updates,
            handoff_url: opener.last_opened(),
        })
    }
}
