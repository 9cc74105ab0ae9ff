use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminSession, IssuedSession};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// Token unknown, already revoked, or past its expiry.
    #[error("Session not found or expired")]
    Unauthenticated,

    #[error("Session store error: {0}")]
    StoreError(String),
}

/// Holds admin sessions keyed by opaque bearer token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issue a fresh token for `username`.
    async fn create(&self, username: &str) -> Result<IssuedSession, SessionStoreError>;

    /// Look up a live session. Expired sessions are evicted and reported as
    /// `Unauthenticated`.
    async fn validate(&self, token: &str) -> Result<AdminSession, SessionStoreError>;

    /// Drop the token. Unknown tokens are not an error.
    async fn revoke(&self, token: &str) -> Result<(), SessionStoreError>;
}
