use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("mail provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("mail transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError>;
}

pub mod in_memory;
pub mod sendgrid;
