//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{optional_var, parse_var, ConfigError};

/// Record store connection configuration for MySQL
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/realtor_hub"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables.
    ///
    /// Returns `Ok(None)` when `DATABASE_URL` is unset; the caller decides
    /// whether that is acceptable for the current environment.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(url) = optional_var("DATABASE_URL") else {
            return Ok(None);
        };
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 10)?;
        let connect_timeout = parse_var("DATABASE_CONNECT_TIMEOUT", 30)?;

        Ok(Some(Self {
            url,
            max_connections,
            connect_timeout,
            ..Default::default()
        }))
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn default_slow_query_threshold() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_url_is_not_an_error() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(DatabaseConfig::from_env().unwrap().is_none());
        });
    }

    #[test]
    fn test_from_env_reads_pool_settings() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("mysql://u:p@db:3306/hub")),
                ("DATABASE_MAX_CONNECTIONS", Some("25")),
                ("DATABASE_CONNECT_TIMEOUT", None),
            ],
            || {
                let config = DatabaseConfig::from_env().unwrap().unwrap();
                assert_eq!(config.url, "mysql://u:p@db:3306/hub");
                assert_eq!(config.max_connections, 25);
                assert_eq!(config.connect_timeout, 30);
            },
        );
    }
}
