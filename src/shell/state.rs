use crate::modules::appointments::use_cases::relay_notification::handler::RelayNotificationHandler;
use crate::modules::appointments::use_cases::submit_appointment::handler::SubmitAppointmentHandler;
use crate::shared::config::AppConfig;
use crate::shared::infrastructure::mailer::sendgrid::SendGridMailer;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitAppointmentHandler>,
    pub relay_handler: Arc<RelayNotificationHandler>,
}

impl AppState {
    pub fn from_config(config: &AppConfig, client: Client) -> Self {
        let mailer = SendGridMailer::new(
            client.clone(),
            config.relay.sendgrid_api_url.as_str(),
            config.relay.sendgrid_api_key.as_str(),
        );

        Self {
            submit_handler: Arc::new(SubmitAppointmentHandler::from_config(
                config.booking.clone(),
                client,
            )),
            relay_handler: Arc::new(RelayNotificationHandler::new(
                Arc::new(config.relay.clone()),
                Arc::new(mailer),
            )),
        }
    }
}
