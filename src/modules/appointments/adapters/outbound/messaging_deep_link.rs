use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::modules::appointments::core::message::{compose_message, encode_component};
use crate::modules::appointments::core::outcome::{DeliveryOutcome, RejectionReason};
use crate::modules::appointments::core::record::AppointmentRecord;
use crate::shared::infrastructure::link_opener::LinkOpener;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Opens a WhatsApp chat with the clinic, prefilled with the request.
pub struct MessagingDeepLink {
    recipient: String,
    opener: Arc<dyn LinkOpener>,
}

impl MessagingDeepLink {
    /// wa.me only accepts the number's digits.
    pub fn new(recipient: &str, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            recipient: recipient.chars().filter(char::is_ascii_digit).collect(),
            opener,
        }
    }

    pub fn link(&self, record: &AppointmentRecord) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.recipient,
            encode_component(&compose_message(record))
        )
    }
}

#[async_trait]
impl DeliveryChannel for MessagingDeepLink {
    fn name(&self) -> &'static str {
        "messaging_deep_link"
    }

    fn fallback_notice(&self) -> &'static str {
        "Opening WhatsApp as fallback..."
    }

    async fn attempt(&self, record: &AppointmentRecord) -> DeliveryOutcome {
        match self.opener.open(&self.link(record)) {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(error) => {
                warn!(%error, "messaging deep link could not be opened");
                DeliveryOutcome::Rejected(RejectionReason::PopupBlocked)
            }
        }
    }
}
