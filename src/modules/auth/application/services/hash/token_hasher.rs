use sha2::{Digest, Sha256};

/// Hash a session token using SHA-256 before using it as a map key.
/// Raw tokens never sit in the session store.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_consistency() {
        let token = "my_token_123";
        let hash1 = hash_token(token);
        let hash2 = hash_token(token);

        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(hash_token("token_1"), hash_token("token_2"));
    }

    #[test]
    fn test_hash_token_length() {
        // SHA-256 produces 64 hex characters
        assert_eq!(hash_token("any_token").len(), 64);
    }
}
