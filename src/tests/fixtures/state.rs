// AppState builders for inbound tests.

use crate::modules::appointments::core::channel::DeliveryChannel;
use crate::modules::appointments::use_cases::relay_notification::handler::RelayNotificationHandler;
use crate::modules::appointments::use_cases::submit_appointment::handler::SubmitAppointmentHandler;
use crate::shared::config::{DEFAULT_RELAY_PATH, DEFAULT_SENDGRID_API_URL, RelayConfig};
use crate::shared::infrastructure::link_opener::LinkOpener;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn relay_config() -> RelayConfig {
    RelayConfig {
        path: DEFAULT_RELAY_PATH.into(),
        to_email: Some("clinic@example.com".into()),
        from_email: Some("website@example.com".into()),
        sendgrid_api_key: "test-key".into(),
        sendgrid_api_url: DEFAULT_SENDGRID_API_URL.into(),
        clinic_name: "Test Clinic".into(),
    }
}

fn state(
    channels: impl Fn() -> Vec<Arc<dyn DeliveryChannel>> + Send + Sync + 'static,
    config: RelayConfig,
    mailer: Arc<InMemoryMailer>,
) -> AppState {
    AppState {
        submit_handler: Arc::new(SubmitAppointmentHandler::new(Arc::new(
            move |_opener: Arc<dyn LinkOpener>| channels(),
        ))),
        relay_handler: Arc::new(RelayNotificationHandler::new(Arc::new(config), mailer)),
    }
}

/// Booking runs through `channels`; the relay mails into a throwaway inbox.
pub fn make_test_state(
    channels: impl Fn() -> Vec<Arc<dyn DeliveryChannel>> + Send + Sync + 'static,
) -> AppState {
    state(channels, relay_config(), Arc::new(InMemoryMailer::new()))
}

/// Relay mails through `mailer`; booking has no channels.
pub fn make_relay_state(config: RelayConfig, mailer: Arc<InMemoryMailer>) -> AppState {
    state(Vec::new, config, mailer)
}
