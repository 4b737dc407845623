pub mod auth;
pub mod cors;

pub use auth::{CurrentUser, RoleGuard};
pub use cors::create_cors;
