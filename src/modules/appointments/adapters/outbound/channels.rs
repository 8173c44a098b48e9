use crate::modules::appointments::adapters::outbound::form_relay::FormRelay;
use crate::modules::appointments::adapters::outbound::mail_relay::MailRelay;
use crate::modules::appointments::adapters::outbound::messaging_deep_link::MessagingDeepLink;
use crate::modules::appointments::adapters::outbound::server_endpoint::ServerEndpoint;
use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::shared::config::{BookingConfig, ChannelConfig};
use crate::shared::infrastructure::link_opener::LinkOpener;
use reqwest::Client;
use std::sync::Arc;

/// Instantiate the configured channels, in configured order, for one submission.
pub fn build_channels(
    config: &BookingConfig,
    client: &Client,
    opener: Arc<dyn LinkOpener>,
) -> Vec<Arc<dyn DeliveryChannel>> {
    config
        .channels
        .iter()
        .map(|channel| -> Arc<dyn DeliveryChannel> {
            match channel {
                ChannelConfig::Form(form) => Arc::new(FormRelay::new(client.clone(), form.clone())),
                ChannelConfig::Server(server) => {
                    Arc::new(ServerEndpoint::new(client.clone(), server.clone()))
                }
                ChannelConfig::Messaging(messaging) => {
                    Arc::new(MessagingDeepLink::new(&messaging.recipient, opener.clone()))
                }
                ChannelConfig::Mail(mail) => Arc::new(MailRelay::new(mail.clone(), opener.clone())),
            }
        })
        .collect()
}
