//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rh_shared::ProductKeyConfig;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::hashing::SecretHasher;
use crate::services::product_key::ProductKeyService;
use crate::services::token::{TokenService, TokenServiceConfig};

pub const JWT_SECRET: &str = "test-jwt-secret";
pub const PRODUCT_KEY_SECRET: &str = "test-product-key-secret";

/// Counts every store call and delegates to an in-memory store
#[derive(Default)]
pub struct CountingUserRepository {
    pub inner: InMemoryUserRepository,
    pub lookups: AtomicUsize,
    pub creates: AtomicUsize,
}

impl CountingUserRepository {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for CountingUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(user).await
    }
}

/// Lookups always miss; creation always hits the unique constraint.
/// Stands in for a concurrent sign-up winning the race.
pub struct RacingUserRepository;

#[async_trait]
impl UserRepository for RacingUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, DomainError> {
        Ok(None)
    }

    async fn create(&self, _user: NewUser) -> Result<User, DomainError> {
        Err(AuthError::EmailTaken.into())
    }
}

/// Every call fails like an unreachable database
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Err(DomainError::Database {
            message: "connection refused".to_string(),
        })
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, DomainError> {
        Err(DomainError::Database {
            message: "connection refused".to_string(),
        })
    }

    async fn create(&self, _user: NewUser) -> Result<User, DomainError> {
        Err(DomainError::Database {
            message: "connection refused".to_string(),
        })
    }
}

pub fn test_hasher() -> SecretHasher {
    SecretHasher::new(4)
}

pub fn test_token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new(JWT_SECRET)))
}

pub fn test_product_keys() -> Arc<ProductKeyService> {
    Arc::new(ProductKeyService::new(
        &ProductKeyConfig::new(PRODUCT_KEY_SECRET),
        test_hasher(),
    ))
}

pub fn auth_service<U: UserRepository>(repository: Arc<U>) -> AuthService<U> {
    AuthService::new(
        repository,
        test_hasher(),
        test_token_service(),
        test_product_keys(),
        AuthServiceConfig::default(),
    )
}
