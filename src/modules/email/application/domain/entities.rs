use std::fmt;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::content::application::domain::record::SingletonDocument;

/// Outgoing mail relay settings, edited from the admin console.
#[derive(Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmtpConfig {
    #[schema(example = "smtp.gmail.com")]
    pub host: String,
    #[schema(example = 587)]
    pub port: u16,
    /// Implicit TLS when true, STARTTLS otherwise.
    pub secure: bool,
    pub username: String,
    pub password: String,
    #[schema(example = "noreply@example.com")]
    pub from_email: String,
    #[schema(example = "Portfolio")]
    pub from_name: String,
}

impl SmtpConfig {
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty() && !self.from_email.trim().is_empty()
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl SingletonDocument for SmtpConfig {
    const FILE_NAME: &'static str = "smtp.json";
    const LABEL: &'static str = "SMTP configuration";

    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be between 1 and 65535".to_string());
        }
        let from_email = self.from_email.trim();
        if !from_email.is_empty() && !EmailAddress::is_valid(from_email) {
            return Err("fromEmail must be a valid address".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,
}

/// A visitor's message from the public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    course: Option<String>,
}

fn required(value: String, field: &'static str) -> Result<String, ContactFormError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ContactFormError::EmptyField(field));
    }
    Ok(value)
}

impl ContactForm {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
        course: Option<String>,
    ) -> Result<Self, ContactFormError> {
        let email = email.trim().to_string();
        if !EmailAddress::is_valid(&email) {
            return Err(ContactFormError::InvalidEmail);
        }

        // "none" is what the course picker sends when nothing was chosen.
        let course = course
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != "none");

        Ok(Self {
            name: required(name, "name")?,
            email,
            subject: required(subject, "subject")?,
            message: required(message, "message")?,
            course,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
