//! bcrypt-backed one-way hashing

use rh_shared::HashingConfig;
use tokio::task;

use crate::errors::{DomainError, DomainResult};

/// Salted one-way hasher.
///
/// Every hash embeds its own cost and salt, so raising the work factor only
/// affects new hashes; verification keeps working against older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretHasher {
    cost: u32,
}

impl SecretHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &HashingConfig) -> Self {
        Self::new(config.cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash with a freshly generated salt
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Hashing failed: {}", e),
        })
    }

    /// `false` for a mismatch and for anything that is not a valid hash
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        bcrypt::verify(plaintext, hashed).unwrap_or(false)
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_async(&self, plaintext: String) -> DomainResult<String> {
        let hasher = *self;
        task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_async(&self, plaintext: String, hashed: String) -> bool {
        let hasher = *self;
        task::spawn_blocking(move || hasher.verify(&plaintext, &hashed))
            .await
            .unwrap_or(false)
    }
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self::from_config(&HashingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hasher = SecretHasher::new(TEST_COST);
        let hashed = hasher.hash("password1").unwrap();

        assert!(hasher.verify("password1", &hashed));
        assert!(!hasher.verify("password2", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = SecretHasher::new(TEST_COST);
        let first = hasher.hash("same input").unwrap();
        let second = hasher.hash("same input").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same input", &first));
        assert!(hasher.verify("same input", &second));
    }

    #[test]
    fn test_malformed_hash_is_rejected() {
        let hasher = SecretHasher::new(TEST_COST);
        assert!(!hasher.verify("password1", ""));
        assert!(!hasher.verify("password1", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("password1", "$2b$04$short"));
    }

    #[test]
    fn test_old_cost_still_verifies() {
        let old = SecretHasher::new(TEST_COST).hash("password1").unwrap();
        let raised = SecretHasher::new(TEST_COST + 1);

        assert!(raised.verify("password1", &old));
        assert!(raised.hash("password1").unwrap().starts_with("$2b$05$"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = SecretHasher::new(2);
        assert!(matches!(
            hasher.hash("password1"),
            Err(DomainError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_async_variants() {
        let hasher = SecretHasher::new(TEST_COST);
        let hashed = hasher.hash_async("password1".to_string()).await.unwrap();

        assert!(hasher.verify_async("password1".to_string(), hashed.clone()).await);
        assert!(!hasher.verify_async("wrong".to_string(), hashed).await);
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(SecretHasher::default().cost(), 10);
    }
}
