use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    /// The stored hash could not be parsed or checked.
    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Checks a submitted password against the configured admin hash.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// `Ok(false)` for a wrong password; `Err` only when the hash itself is
    /// unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
