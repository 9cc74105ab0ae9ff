use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Session revocation failed: {0}")]
    RevocationFailed(String),
}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    /// Revokes `token` if present. Logging out twice is not an error.
    async fn execute(&self, token: Option<&str>) -> Result<(), LogoutError>;
}

pub struct LogoutAdminUseCase {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutAdminUseCase {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: Option<&str>) -> Result<(), LogoutError> {
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return Ok(());
        };

        self.sessions
            .revoke(token)
            .await
            .map_err(|e| LogoutError::RevocationFailed(e.to_string()))?;

        info!("Admin session revoked");
        Ok(())
    }
}
