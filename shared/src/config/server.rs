//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{optional_var, parse_var, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS` and `ALLOWED_ORIGINS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: optional_var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var("SERVER_PORT", defaults.port)?,
            workers: parse_var("SERVER_WORKERS", defaults.workers)?,
            max_payload_size: defaults.max_payload_size,
            cors: CorsConfig::from_env()?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; empty means "any" outside production
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = optional_var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            allowed_origins,
            max_age: parse_var("CORS_MAX_AGE", default_max_age())?,
        })
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::new("127.0.0.1", 9000).bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_allowed_origins_are_split_and_trimmed() {
        temp_env::with_var(
            "ALLOWED_ORIGINS",
            Some("https://a.example, https://b.example,,"),
            || {
                let cors = CorsConfig::from_env().unwrap();
                assert_eq!(
                    cors.allowed_origins,
                    vec!["https://a.example", "https://b.example"]
                );
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("SERVER_PORT", Some("http"), || {
            assert!(matches!(
                ServerConfig::from_env(),
                Err(ConfigError::Invalid { .. })
            ));
        });
    }
}
