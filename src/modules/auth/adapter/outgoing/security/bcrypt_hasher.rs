use async_trait::async_trait;
use bcrypt::verify;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Verifies `$2a$`, `$2b$` and `$2y$` hashes. The cost is read from the hash.
#[derive(Clone, Default)]
pub struct BcryptHasher;

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
