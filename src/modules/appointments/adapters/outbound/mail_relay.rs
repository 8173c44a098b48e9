use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::modules::appointments::core::message::{compose_message, encode_component};
use crate::modules::appointments::core::outcome::{DeliveryOutcome, RejectionReason};
use crate::modules::appointments::core::record::AppointmentRecord;
use crate::shared::config::MailConfig;
use crate::shared::infrastructure::link_opener::LinkOpener;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Opens the visitor's mail client with a drafted request to the clinic.
pub struct MailRelay {
    config: MailConfig,
    opener: Arc<dyn LinkOpener>,
}

impl MailRelay {
    pub fn new(config: MailConfig, opener: Arc<dyn LinkOpener>) -> Self {
        Self { config, opener }
    }

    pub fn link(&self, record: &AppointmentRecord) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.config.recipient,
            encode_component(&self.config.subject),
            encode_component(&compose_message(record))
        )
    }
}

#[async_trait]
impl DeliveryChannel for MailRelay {
    fn name(&self) -> &'static str {
        "mail_relay"
    }

    fn fallback_notice(&self) -> &'static str {
        "Opening email as fallback..."
    }

    async fn attempt(&self, record: &AppointmentRecord) -> DeliveryOutcome {
        match self.opener.open(&self.link(record)) {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(error) => {
                warn!(%error, "mail compose link could not be opened");
                DeliveryOutcome::Rejected(RejectionReason::PopupBlocked)
            }
        }
    }
}
