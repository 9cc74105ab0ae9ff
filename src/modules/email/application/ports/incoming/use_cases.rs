use async_trait::async_trait;

use crate::email::application::domain::entities::ContactForm;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<(), ContactError>;
}
