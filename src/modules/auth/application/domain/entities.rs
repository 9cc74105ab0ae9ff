use chrono::{DateTime, Utc};
use thiserror::Error;

/// The single administrator identity, loaded once at startup.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

#[derive(Debug, Error)]
pub enum CredentialsConfigError {
    #[error("ADMIN_USERNAME is not set")]
    MissingUsername,

    #[error("neither ADMIN_PASSWORD_HASH nor ADMIN_PASSWORD is set")]
    MissingPassword,

    #[error("ADMIN_PASSWORD_HASH is neither a bcrypt nor an argon2 hash")]
    UnsupportedHash,

    #[error("failed to hash ADMIN_PASSWORD: {0}")]
    HashFailed(String),
}

/// Hash family of the configured password, detected from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHashScheme {
    Bcrypt,
    Argon2,
}

impl PasswordHashScheme {
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$") {
            Some(Self::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(Self::Argon2)
        } else {
            None
        }
    }
}

impl AdminCredentials {
    pub fn new(username: String, password_hash: String) -> Result<Self, CredentialsConfigError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(CredentialsConfigError::MissingUsername);
        }
        if PasswordHashScheme::detect(&password_hash).is_none() {
            return Err(CredentialsConfigError::UnsupportedHash);
        }

        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Reads `ADMIN_USERNAME` and `ADMIN_PASSWORD_HASH`.
    ///
    /// `ADMIN_PASSWORD` is accepted as a development fallback and is hashed
    /// with bcrypt exactly once, here.
    pub fn from_env() -> Result<Self, CredentialsConfigError> {
        let username = std::env::var("ADMIN_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(CredentialsConfigError::MissingUsername)?;

        if let Some(hash) = std::env::var("ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            return Self::new(username, hash.trim().to_string());
        }

        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(CredentialsConfigError::MissingPassword)?;

        tracing::warn!("ADMIN_PASSWORD_HASH not set, hashing ADMIN_PASSWORD at startup");
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| CredentialsConfigError::HashFailed(e.to_string()))?;

        Self::new(username, hash)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn scheme(&self) -> PasswordHashScheme {
        // `new` rejects anything `detect` does not recognise.
        PasswordHashScheme::detect(&self.password_hash).unwrap_or(PasswordHashScheme::Bcrypt)
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// A live admin session as held by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// What the client receives after a successful login.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
