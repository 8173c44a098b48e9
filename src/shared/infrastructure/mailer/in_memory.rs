use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    is_offline: bool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailerError> {
        if self.is_offline {
            return Err(MailerError::Transport("Mailer offline".into()));
        }
        self.sent.lock().await.push(email);
        Ok(())
    }
}
