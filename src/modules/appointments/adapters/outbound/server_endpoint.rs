use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::modules::appointments::core::outcome::{DeliveryOutcome, RejectionReason};
use crate::modules::appointments::core::record::AppointmentRecord;
use crate::shared::config::ServerEndpointConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

pub struct ServerEndpoint {
    client: Client,
    config: ServerEndpointConfig,
}

impl ServerEndpoint {
    pub fn new(client: Client, config: ServerEndpointConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl DeliveryChannel for ServerEndpoint {
    fn name(&self) -> &'static str {
        "server_endpoint"
    }

    fn fallback_notice(&self) -> &'static str {
        "Sending your request to the clinic..."
    }

    async fn attempt(&self, record: &AppointmentRecord) -> DeliveryOutcome {
        let request = self
            .client
            .post(&self.config.url)
            .json(&record.payload())
            .send();

        let reason = match tokio::time::timeout(self.config.timeout, request).await {
            Ok(Ok(response)) if response.status().is_success() => {
                return DeliveryOutcome::Delivered;
            }
            Ok(Ok(response)) => RejectionReason::NonSuccessStatus(response.status().as_u16()),
            Ok(Err(error)) if error.is_timeout() => RejectionReason::Timeout,
            Ok(Err(error)) => RejectionReason::NetworkError(error.to_string()),
            Err(_elapsed) => RejectionReason::Timeout,
        };
        warn!(url = %self.config.url, %reason, "server endpoint rejected the request");
        DeliveryOutcome::Rejected(reason)
    }
}
