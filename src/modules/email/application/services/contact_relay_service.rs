use std::fmt;
use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use tracing::{error, info};

use crate::content::application::domain::entities::ContactInfo;
use crate::content::application::ports::incoming::use_cases::SingletonUseCase;
use crate::email::application::domain::entities::{ContactForm, OutgoingEmail, SmtpConfig};
use crate::email::application::ports::incoming::{ContactError, SendContactMessageUseCase};
use crate::email::application::ports::outgoing::EmailSender;

/// Relays contact-form submissions to the site owner.
#[derive(Clone)]
pub struct ContactRelayService {
    sender: Arc<dyn EmailSender>,
    smtp_config: Arc<dyn SingletonUseCase<SmtpConfig>>,
    contact_info: Arc<dyn SingletonUseCase<ContactInfo>>,
    recipient_override: Option<String>,
}

impl fmt::Debug for ContactRelayService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactRelayService")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient_override", &self.recipient_override)
            .finish()
    }
}

impl ContactRelayService {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        smtp_config: Arc<dyn SingletonUseCase<SmtpConfig>>,
        contact_info: Arc<dyn SingletonUseCase<ContactInfo>>,
    ) -> Self {
        Self {
            sender,
            smtp_config,
            contact_info,
            recipient_override: None,
        }
    }

    /// Sends to `recipient` instead of the published contact address.
    pub fn with_recipient(mut self, recipient: Option<String>) -> Self {
        self.recipient_override = recipient.filter(|r| !r.trim().is_empty());
        self
    }

    async fn recipient(&self) -> Result<String, ContactError> {
        if let Some(recipient) = &self.recipient_override {
            return Ok(recipient.clone());
        }
        self.contact_info
            .get()
            .await
            .map(|info| info.email)
            .map_err(|e| ContactError::DeliveryFailed(format!("no recipient: {}", e)))
    }
}

#[derive(Template)]
#[template(path = "email/contact.html")]
struct ContactEmailHtml<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    course: Option<&'a str>,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "email/contact.txt")]
struct ContactEmailText<'a> {
    name: &'a str,
    email: &'a str,
    course: Option<&'a str>,
    message: &'a str,
}

/// Renders the relay email. Visitor input is HTML-escaped in the HTML body.
pub fn compose_contact_email(
    form: &ContactForm,
    to: &str,
) -> Result<OutgoingEmail, askama::Error> {
    let html_body = ContactEmailHtml {
        name: form.name(),
        email: form.email(),
        subject: form.subject(),
        course: form.course(),
        message_lines: form.message().lines().collect(),
    }
    .render()?;
    let text_body = ContactEmailText {
        name: form.name(),
        email: form.email(),
        course: form.course(),
        message: form.message(),
    }
    .render()?;

    Ok(OutgoingEmail {
        to: to.to_string(),
        reply_to: Some(form.email().to_string()),
        subject: format!("Portfolio Contact: {}", form.subject()),
        text_body,
        html_body,
    })
}

#[async_trait]
impl SendContactMessageUseCase for ContactRelayService {
    async fn execute(&self, form: ContactForm) -> Result<(), ContactError> {
        let smtp = self.smtp_config.get().await.map_err(|e| {
            error!("SMTP configuration unavailable: {}", e);
            ContactError::DeliveryFailed(e.to_string())
        })?;
        if !smtp.is_configured() {
            error!("Contact message dropped: SMTP is not configured");
            return Err(ContactError::DeliveryFailed(
                "SMTP is not configured".to_string(),
            ));
        }

        let to = self.recipient().await?;
        let email = compose_contact_email(&form, &to).map_err(|e| {
            error!("Failed to render contact email: {}", e);
            ContactError::DeliveryFailed(e.to_string())
        })?;

        self.sender.send_email(&smtp, &email).await.map_err(|e| {
            error!("Failed to relay contact message: {}", e);
            ContactError::DeliveryFailed(e)
        })?;

        info!("Relayed contact message from {}", form.email());
        Ok(())
    }
}
