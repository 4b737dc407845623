//! Database module - MySQL implementations using SQLx
//!
//! This module provides the record store behind the credential core:
//! - Connection pool management and health checks
//! - Embedded `users` schema migration
//! - `UserRepository` implementation

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
