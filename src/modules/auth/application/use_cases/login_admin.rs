use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::{AdminCredentials, IssuedSession},
    ports::outgoing::{PasswordHasher, SessionStore},
};

// ========================= Login Request =========================
/// Credentials as submitted. Both fields are compared verbatim, so empty or
/// padded values simply fail verification.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Session creation failed: {0}")]
    SessionCreationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginAdminResponse {
    pub session_id: String,
    /// Milliseconds since the Unix epoch.
    pub expires_at: i64,
}

impl From<IssuedSession> for LoginAdminResponse {
    fn from(session: IssuedSession) -> Self {
        Self {
            session_id: session.token,
            expires_at: session.expires_at.timestamp_millis(),
        }
    }
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            sessions,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let username_matches = request.username() == self.credentials.username();

        // Always run the hash check so an unknown username costs the same.
        let password_matches = self
            .password_hasher
            .verify_password(request.password(), self.credentials.password_hash())
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !(username_matches && password_matches) {
            warn!("Rejected admin login attempt for '{}'", request.username());
            return Err(LoginError::InvalidCredentials);
        }

        let session = self
            .sessions
            .create(self.credentials.username())
            .await
            .map_err(|e| LoginError::SessionCreationFailed(e.to_string()))?;

        info!("Admin '{}' logged in", self.credentials.username());
        Ok(session.into())
    }
}
