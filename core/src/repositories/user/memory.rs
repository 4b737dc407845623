//! In-memory implementation of UserRepository
//!
//! Backs the API when no database is configured and serves as the store in
//! tests. Ids are assigned from a counter starting at 1.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

#[derive(Default)]
struct Records {
    users: HashMap<i64, User>,
    last_id: i64,
}

/// Process-local user store
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    records: Arc<RwLock<Records>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.records.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Delete a user, returning it if it existed
    pub async fn remove(&self, id: i64) -> Option<User> {
        self.records.write().await.users.remove(&id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        Ok(records.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let records = self.records.read().await;
        Ok(records.users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut records = self.records.write().await;

        if records.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken.into());
        }

        records.last_id += 1;
        let user = user.into_user(records.last_id);
        records.users.insert(user.id, user.clone());
        Ok(user)
    }
}
