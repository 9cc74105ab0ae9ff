pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::auth::application::{
    domain::entities::PasswordHashScheme, ports::outgoing::PasswordHasher,
};
use argon2_hasher::Argon2Hasher;
use bcrypt_hasher::BcryptHasher;

/// Pick the hasher able to verify hashes of `scheme`.
pub fn hasher_for(scheme: PasswordHashScheme) -> Arc<dyn PasswordHasher> {
    match scheme {
        PasswordHashScheme::Bcrypt => Arc::new(BcryptHasher),
        PasswordHashScheme::Argon2 => Arc::new(Argon2Hasher),
    }
}
