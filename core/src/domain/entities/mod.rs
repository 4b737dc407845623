//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{default_token_ttl, Claims, TokenSubject, TOKEN_EXPIRY_DAYS};
pub use user::{NewUser, User, UserRole};
