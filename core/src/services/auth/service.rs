//! Main authentication service implementation

use std::sync::Arc;

use rh_shared::utils::email::{mask_email, normalize_email};
use tracing::{info, warn};

use crate::domain::entities::token::TokenSubject;
use crate::domain::entities::user::{NewUser, User, UserRole};
use crate::domain::value_objects::{AuthResponse, SignIn, SignUp};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::hashing::SecretHasher;
use crate::services::product_key::ProductKeyService;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service orchestrating sign-up and sign-in
///
/// Each call is a single attempt against the record store. A store failure
/// propagates to the caller; creation is never retried.
pub struct AuthService<U: UserRepository> {
    /// User repository for record store operations
    user_repository: Arc<U>,
    /// Password hasher
    hasher: SecretHasher,
    /// Token service for minting session tokens
    token_service: Arc<TokenService>,
    /// Product key verification for privileged roles
    product_keys: Arc<ProductKeyService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(
        user_repository: Arc<U>,
        hasher: SecretHasher,
        token_service: Arc<TokenService>,
        product_keys: Arc<ProductKeyService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            hasher,
            token_service,
            product_keys,
            config,
        }
    }

    /// Register a new identity and return a session token
    ///
    /// Rejections happen in order of cost: product key presence, product key
    /// validity, e-mail uniqueness, and only then password hashing. A caller
    /// without a valid key therefore never learns whether an e-mail exists.
    ///
    /// # Errors
    ///
    /// * `AuthError::ProductKeyRequired` - non-buyer role without a key
    /// * `AuthError::InvalidProductKey` - key not minted for this e-mail and role
    /// * `AuthError::EmailTaken` - e-mail already registered, including a
    ///   duplicate reported by the store after a concurrent sign-up
    pub async fn sign_up(&self, command: SignUp) -> DomainResult<AuthResponse> {
        let email = normalize_email(&command.email);
        let role = command.role;

        if role.requires_product_key() {
            let key = command
                .product_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or(AuthError::ProductKeyRequired)?;

            if !self.product_keys.verify(&email, role, key).await {
                warn!(email = %mask_email(&email), role = %role, "Rejected sign-up with invalid product key");
                return Err(AuthError::InvalidProductKey.into());
            }
        }

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = self.hasher.hash_async(command.password).await?;

        let user = self
            .user_repository
            .create(NewUser {
                name: command.name,
                email,
                phone: command.phone,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = user.id, email = %mask_email(&user.email), role = %role, "User signed up");

        self.issue_token(&user)
    }

    /// Authenticate an existing identity and return a session token
    ///
    /// Unknown e-mail and wrong password fail with the same
    /// `AuthError::InvalidCredentials`.
    pub async fn sign_in(&self, command: SignIn) -> DomainResult<AuthResponse> {
        let email = normalize_email(&command.email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!(email = %mask_email(&email), "Sign-in for unknown e-mail");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_matches = self
            .hasher
            .verify_async(command.password, user.password_hash.clone())
            .await;
        if !password_matches {
            warn!(user_id = user.id, "Sign-in with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "User signed in");

        self.issue_token(&user)
    }

    /// Mint a product key an administrator can hand out for `(email, role)`
    pub async fn issue_product_key(&self, email: &str, role: UserRole) -> DomainResult<String> {
        let email = normalize_email(email);
        let key = self.product_keys.mint(&email, role).await?;
        info!(email = %mask_email(&email), role = %role, "Product key issued");
        Ok(key)
    }

    fn issue_token(&self, user: &User) -> DomainResult<AuthResponse> {
        let subject = TokenSubject::new(user.name.clone(), user.id);
        let token = self.token_service.mint(&subject, self.config.token_ttl)?;
        Ok(AuthResponse::new(token))
    }
}
