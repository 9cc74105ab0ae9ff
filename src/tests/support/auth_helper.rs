#[cfg(test)]
pub mod test_helpers {
    use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
    use crate::auth::application::domain::entities::AdminCredentials;
    use crate::auth::application::ports::outgoing::SessionStore;

    pub const TEST_ADMIN_USERNAME: &str = "admin";
    pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

    /// Minimum bcrypt cost keeps hashing fast in tests.
    pub const TEST_BCRYPT_COST: u32 = 4;

    pub fn test_hasher() -> BcryptHasher {
        BcryptHasher
    }

    pub fn create_test_credentials() -> AdminCredentials {
        let hash = bcrypt::hash(TEST_ADMIN_PASSWORD, TEST_BCRYPT_COST).unwrap();
        AdminCredentials::new(TEST_ADMIN_USERNAME.to_string(), hash).unwrap()
    }

    /// Issues a session directly in `sessions` and returns its bearer token.
    pub async fn issue_admin_token(sessions: &dyn SessionStore) -> String {
        sessions.create(TEST_ADMIN_USERNAME).await.unwrap().token
    }

    pub fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }
}
