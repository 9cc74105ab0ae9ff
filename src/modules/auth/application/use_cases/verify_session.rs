use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AdminSession,
    ports::outgoing::{SessionStore, SessionStoreError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifySessionError {
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Session store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait IVerifySessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError>;
}

pub struct VerifySessionUseCase {
    sessions: Arc<dyn SessionStore>,
}

impl VerifySessionUseCase {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl IVerifySessionUseCase for VerifySessionUseCase {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError> {
        if token.trim().is_empty() {
            return Err(VerifySessionError::Unauthenticated);
        }

        self.sessions.validate(token).await.map_err(|e| match e {
            SessionStoreError::Unauthenticated => VerifySessionError::Unauthenticated,
            SessionStoreError::StoreError(msg) => VerifySessionError::StoreError(msg),
        })
    }
}
