// SendGrid implementation of the Mailer port (v3 mail send API).

use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct SendGridMailBody<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Clone)]
pub struct SendGridMailer {
    client: Client,
    api_url: String,
    api_key: String,
}

impl SendGridMailer {
    pub fn new(client: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        let body = SendGridMailBody {
            personalizations: vec![Personalization {
                to: vec![Address { email: &email.to }],
            }],
            from: Address { email: &email.from },
            subject: &email.subject,
            content: vec![Content {
                content_type: "text/html",
                value: &email.html,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| MailerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
