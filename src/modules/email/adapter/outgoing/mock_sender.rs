use crate::email::application::domain::entities::{OutgoingEmail, SmtpConfig};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>, // Stores sent emails for verification
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, _smtp: &SmtpConfig, email: &OutgoingEmail) -> Result<(), String> {
        self.sent_emails.lock().unwrap().push(email.clone());
        Ok(())
    }
}
