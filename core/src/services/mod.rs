//! Business services containing domain logic and use cases.

pub mod auth;
pub mod guard;
pub mod hashing;
pub mod product_key;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use guard::{extract_bearer, Access, AccessPolicy, AuthorizationGuard, DenyReason};
pub use hashing::SecretHasher;
pub use product_key::ProductKeyService;
pub use token::{TokenService, TokenServiceConfig};
