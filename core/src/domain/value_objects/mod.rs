//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod credentials;
pub mod permissions;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use credentials::{SignIn, SignUp};
pub use permissions::{RoleSet, RoutePermissions};
