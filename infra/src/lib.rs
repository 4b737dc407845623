//! # Infrastructure Layer
//!
//! Concrete implementations of the record store the credential core
//! depends on:
//! - **Database**: MySQL connection pool and `UserRepository` over SQLx
//! - **Migrations**: the `users` schema, embedded at compile time

// Re-export core types for convenience
pub use rh_core::errors::{DomainError, DomainResult};

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
