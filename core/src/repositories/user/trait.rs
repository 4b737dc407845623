//! User repository trait defining the interface for user record persistence.
//!
//! The credential core only ever needs three operations from the record
//! store: lookup by e-mail, lookup by id, and creation. Implementations live
//! in the infrastructure layer (MySQL) or in [`super::InMemoryUserRepository`].

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use rh_core::repositories::UserRepository;
/// use rh_core::domain::entities::user::{NewUser, User};
/// use rh_core::errors::DomainError;
///
/// struct RemoteUserRepository;
///
/// #[async_trait]
/// impl UserRepository for RemoteUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: NewUser) -> Result<User, DomainError> {
///         Ok(user.into_user(1))
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their (already normalized) e-mail address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this e-mail
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their store-assigned identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return it with its assigned id
    ///
    /// Implementations must enforce e-mail uniqueness and report a duplicate
    /// as [`crate::errors::AuthError::EmailTaken`], so that a concurrent
    /// sign-up racing past the service's own existence check is still rejected.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
