use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;

use crate::auth::application::{
    domain::entities::{AdminSession, IssuedSession},
    ports::outgoing::{SessionStore, SessionStoreError},
    services::hash::hash_token,
};

const TOKEN_LENGTH: usize = 48;
const DEFAULT_TTL_HOURS: i64 = 24;
/// One year; larger values are clamped.
const MAX_TTL_HOURS: i64 = 24 * 365;

/// Process-local session store.
///
/// Keys are SHA-256 hashes of the issued tokens, so a dump of the map does not
/// leak usable bearer credentials. Nothing survives a restart.
pub struct InMemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Reads `SESSION_TTL_HOURS`, defaulting to 24.
    pub fn from_env() -> Self {
        Self::new(ttl_from_hours(std::env::var("SESSION_TTL_HOURS").ok().as_deref()))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// Missing, unparsable or non-positive values fall back to the default.
fn ttl_from_hours(raw: Option<&str>) -> Duration {
    let hours = raw
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|h| *h > 0)
        .unwrap_or(DEFAULT_TTL_HOURS)
        .min(MAX_TTL_HOURS);

    Duration::try_hours(hours).unwrap_or_else(|| Duration::hours(DEFAULT_TTL_HOURS))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, username: &str) -> Result<IssuedSession, SessionStoreError> {
        let now = Utc::now();
        let token = Self::generate_token();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| SessionStoreError::StoreError("session expiry out of range".into()))?;

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_expired_at(now));
        sessions.insert(
            hash_token(&token),
            AdminSession {
                username: username.to_string(),
                expires_at,
            },
        );

        Ok(IssuedSession { token, expires_at })
    }

    async fn validate(&self, token: &str) -> Result<AdminSession, SessionStoreError> {
        let key = hash_token(token);

        let session = {
            let sessions = self.sessions.read().await;
            sessions.get(&key).cloned()
        };

        match session {
            None => Err(SessionStoreError::Unauthenticated),
            Some(session) if session.is_expired_at(Utc::now()) => {
                self.sessions.write().await.remove(&key);
                tracing::debug!("Evicted expired admin session");
                Err(SessionStoreError::Unauthenticated)
            }
            Some(session) => Ok(session),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&hash_token(token));
        Ok(())
    }
}
