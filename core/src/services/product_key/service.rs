//! Product key minting and verification
//!
//! A key is the salted hash of a digest over `"{email}-{role}-{secret}"`.
//! Nothing is stored: verification recomputes the digest and checks it
//! against the supplied key, so a key only works for the exact e-mail and
//! role it was minted for. The concatenation order must never change or
//! every key already handed out stops verifying.

use std::fmt;

use rh_shared::utils::email::normalize_email;
use rh_shared::ProductKeyConfig;
use sha2::{Digest, Sha256};

use crate::domain::entities::user::UserRole;
use crate::errors::DomainResult;
use crate::services::hashing::SecretHasher;

pub struct ProductKeyService {
    secret: String,
    hasher: SecretHasher,
}

impl ProductKeyService {
    pub fn new(config: &ProductKeyConfig, hasher: SecretHasher) -> Self {
        Self {
            secret: config.secret.clone(),
            hasher,
        }
    }

    /// Hex SHA-256 of the canonical material, which keeps the secret inside
    /// bcrypt's 72-byte input window for any e-mail length.
    fn material(&self, email: &str, role: UserRole) -> String {
        let canonical = format!("{}-{}-{}", normalize_email(email), role.as_str(), self.secret);
        hex::encode(Sha256::digest(canonical.as_bytes()))
    }

    /// Mint a distributable key for `(email, role)`
    pub async fn mint(&self, email: &str, role: UserRole) -> DomainResult<String> {
        self.hasher.hash_async(self.material(email, role)).await
    }

    /// Check a supplied key against `(email, role)`
    pub async fn verify(&self, email: &str, role: UserRole, supplied_key: &str) -> bool {
        self.hasher
            .verify_async(self.material(email, role), supplied_key.to_string())
            .await
    }
}

impl fmt::Debug for ProductKeyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductKeyService")
            .field("secret", &"<redacted>")
            .field("hasher", &self.hasher)
            .finish()
    }
}
