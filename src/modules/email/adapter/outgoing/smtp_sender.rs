use crate::email::application::domain::entities::{OutgoingEmail, SmtpConfig};
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Opens a transport for the given relay settings.
pub trait MailerFactory: Send + Sync {
    fn connect(&self, config: &SmtpConfig) -> Result<Box<dyn Mailer>, String>;
}

pub struct LettreMailerFactory;

impl MailerFactory for LettreMailerFactory {
    fn connect(&self, config: &SmtpConfig) -> Result<Box<dyn Mailer>, String> {
        let host = config.host.trim();
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        }
        .map_err(|e| e.to_string())?
        .port(config.port);

        let builder = if config.username.trim().is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
        };

        Ok(Box::new(builder.build()))
    }
}

/// Sends through an SMTP relay built from the stored config on every call,
/// so edits in the admin console apply without a restart.
pub struct SmtpEmailSender {
    factory: Box<dyn MailerFactory>,
}

impl SmtpEmailSender {
    pub fn new() -> Self {
        Self::new_with_factory(Box::new(LettreMailerFactory))
    }

    pub fn new_with_factory(factory: Box<dyn MailerFactory>) -> Self {
        Self { factory }
    }
}

impl Default for SmtpEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

fn build_message(smtp: &SmtpConfig, email: &OutgoingEmail) -> Result<Message, String> {
    let from_name = smtp.from_name.trim();
    let from = Mailbox::new(
        (!from_name.is_empty()).then(|| from_name.to_string()),
        smtp.from_email
            .trim()
            .parse()
            .map_err(|e| format!("invalid from address: {:?}", e))?,
    );

    let mut builder = Message::builder()
        .from(from)
        .to(email
            .to
            .parse()
            .map_err(|e| format!("invalid recipient: {:?}", e))?)
        .subject(email.subject.as_str());

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(
            reply_to
                .parse()
                .map_err(|e| format!("invalid reply-to: {:?}", e))?,
        );
    }

    builder
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))
        .map_err(|e| e.to_string())
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, smtp: &SmtpConfig, email: &OutgoingEmail) -> Result<(), String> {
        let message = build_message(smtp, email)?;
        let mailer = self.factory.connect(smtp)?;
        mailer.send(message).await
    }
}
