use async_trait::async_trait;

use crate::email::application::domain::entities::{OutgoingEmail, SmtpConfig};

/// Delivers one message through the relay described by `smtp`.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, smtp: &SmtpConfig, email: &OutgoingEmail) -> Result<(), String>;
}
