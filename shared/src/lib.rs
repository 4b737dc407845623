//! Shared utilities and common types for the Realtor Hub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The wire error response structure
//! - Utility functions (e-mail masking for logs)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, ConfigError, DatabaseConfig, Environment, HashingConfig, JwtConfig,
    LoggingConfig, ProductKeyConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
