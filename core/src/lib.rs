//! # Realtor Hub Core
//!
//! Credential and access-control core for the Realtor Hub backend.
//! This crate contains domain entities, the services for hashing, tokens,
//! product keys, sign-up/sign-in and route authorization, the record store
//! interface, and the error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, NewUser, TokenSubject, User, UserRole};
pub use domain::value_objects::{AuthResponse, RoleSet, RoutePermissions, SignIn, SignUp};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    Access, AccessPolicy, AuthService, AuthServiceConfig, AuthorizationGuard, DenyReason,
    ProductKeyService, SecretHasher, TokenService, TokenServiceConfig,
};
