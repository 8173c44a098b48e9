// Fire-and-forget post to a hosted form; never claims delivery.

use crate::modules::appointments::core::channel::{DeliveryChannel, DispatchMode};
use crate::modules::appointments::core::outcome::DeliveryOutcome;
use crate::modules::appointments::core::record::AppointmentRecord;
use crate::shared::config::FormRelayConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

pub struct FormRelay {
    client: Client,
    config: FormRelayConfig,
}

impl FormRelay {
    pub fn new(client: Client, config: FormRelayConfig) -> Self {
        Self { client, config }
    }

    /// Only mapped fields are sent, keyed by the endpoint's identifiers.
    pub fn form_pairs(&self, record: &AppointmentRecord) -> Vec<(String, String)> {
        self.config
            .fields
            .iter()
            .map(|(field, identifier)| (identifier.clone(), record.field(*field).to_string()))
            .collect()
    }
}

#[async_trait]
impl DeliveryChannel for FormRelay {
    fn name(&self) -> &'static str {
        "form_relay"
    }

    fn mode(&self) -> DispatchMode {
        DispatchMode::Background
    }

    async fn attempt(&self, record: &AppointmentRecord) -> DeliveryOutcome {
        let pairs = self.form_pairs(record);
        match self.client.post(&self.config.url).form(&pairs).send().await {
            Ok(response) => debug!(status = %response.status(), "form relay dispatched"),
            Err(error) => warn!(%error, "form relay dispatch failed"),
        }
        DeliveryOutcome::Indeterminate
    }
}
