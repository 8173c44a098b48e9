// Notification relay: forwards one appointment request to the clinic inbox.

use crate::modules::appointments::use_cases::relay_notification::email::{
    compose_html, compose_subject,
};
use crate::shared::config::RelayConfig;
use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Request body; missing keys and nulls read as empty strings, numbers and
/// booleans as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelayRequest {
    #[serde(deserialize_with = "scalar_string")]
    pub first_name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub last_name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub phone: String,
    #[serde(deserialize_with = "scalar_string")]
    pub email: String,
    #[serde(deserialize_with = "scalar_string")]
    pub date: String,
    #[serde(deserialize_with = "scalar_string")]
    pub time: String,
    #[serde(deserialize_with = "scalar_string")]
    pub notes: String,
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required fields: firstName or phone.")]
    MissingRequiredFields,

    #[error("Email destination not configured (TO_EMAIL or FROM_EMAIL missing).")]
    DestinationNotConfigured,

    #[error(transparent)]
    Mailer(#[from] MailerError),
}

pub struct RelayNotificationHandler {
    config: Arc<RelayConfig>,
    mailer: Arc<dyn Mailer>,
}

impl RelayNotificationHandler {
    pub fn new(config: Arc<RelayConfig>, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    #[tracing::instrument(name = "relay_notification", skip_all, fields(relay_id = %Uuid::now_v7()))]
    pub async fn handle(&self, request: RelayRequest) -> Result<(), RelayError> {
        if request.first_name.trim().is_empty() || request.phone.trim().is_empty() {
            return Err(RelayError::MissingRequiredFields);
        }

        let (Some(to), Some(from)) = (&self.config.to_email, &self.config.from_email) else {
            warn!("relay destination is not configured");
            return Err(RelayError::DestinationNotConfigured);
        };

        let email = OutgoingEmail {
            to: to.clone(),
            from: from.clone(),
            subject: compose_subject(&request),
            html: compose_html(&request, &self.config.clinic_name),
        };

        self.mailer.send(email).await.inspect_err(|error| {
            warn!(%error, "relay email was not sent");
        })?;
        info!("relay email sent");
        Ok(())
    }
}
