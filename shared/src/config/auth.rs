//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{parse_var, require_var, ConfigError};

/// Default token lifetime: 7 days
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Longest accepted token lifetime: 10 years
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Default bcrypt work factor
pub const DEFAULT_HASH_COST: u32 = 10;

/// Lowest and highest work factor bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret for signing tokens
    pub secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_ttl")]
    pub ttl_seconds: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and the default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    /// Load from `JWT_SECRET` and `JWT_TTL_SECONDS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = require_var("JWT_SECRET")?;
        let ttl_seconds = parse_var("JWT_TTL_SECONDS", DEFAULT_TOKEN_TTL_SECONDS)?;
        if !(1..=MAX_TOKEN_TTL_SECONDS).contains(&ttl_seconds) {
            return Err(ConfigError::invalid(
                "JWT_TTL_SECONDS",
                format!("must be between 1 and {}", MAX_TOKEN_TTL_SECONDS),
            ));
        }
        Ok(Self { secret, ttl_seconds })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Shared secret backing product keys
#[derive(Clone, Deserialize, Serialize)]
pub struct ProductKeyConfig {
    pub secret: String,
}

impl ProductKeyConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Load from `PRODUCT_KEY_SECRET`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: require_var("PRODUCT_KEY_SECRET")?,
        })
    }
}

impl fmt::Debug for ProductKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductKeyConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Password and product-key hashing configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct HashingConfig {
    /// bcrypt work factor applied to new hashes
    pub cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_HASH_COST,
        }
    }
}

impl HashingConfig {
    /// Load from `BCRYPT_COST`
    pub fn from_env() -> Result<Self, ConfigError> {
        let cost = parse_var("BCRYPT_COST", DEFAULT_HASH_COST)?;
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                format!("must be between {} and {}", MIN_HASH_COST, MAX_HASH_COST),
            ));
        }
        Ok(Self { cost })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub product_key: ProductKeyConfig,
    #[serde(default)]
    pub hashing: HashingConfig,
}

impl AuthConfig {
    /// Create from environment variables. Both secrets are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            product_key: ProductKeyConfig::from_env()?,
            hashing: HashingConfig::from_env()?,
        })
    }

    pub fn token_ttl_seconds(&self) -> i64 {
        self.jwt.ttl_seconds
    }
}

fn default_ttl() -> i64 {
    DEFAULT_TOKEN_TTL_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults_to_seven_days() {
        let config = JwtConfig::new("my-secret");
        assert_eq!(config.ttl_seconds, 604800);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let jwt = format!("{:?}", JwtConfig::new("top-secret"));
        let key = format!("{:?}", ProductKeyConfig::new("also-secret"));
        assert!(!jwt.contains("top-secret"));
        assert!(!key.contains("also-secret"));
    }

    #[test]
    fn test_auth_config_requires_both_secrets() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("jwt")),
                ("PRODUCT_KEY_SECRET", None::<&str>),
                ("JWT_TTL_SECONDS", None),
                ("BCRYPT_COST", None),
            ],
            || {
                assert_eq!(
                    AuthConfig::from_env().unwrap_err(),
                    ConfigError::missing("PRODUCT_KEY_SECRET")
                );
            },
        );

        temp_env::with_vars(
            [
                ("JWT_SECRET", None::<&str>),
                ("PRODUCT_KEY_SECRET", Some("pk")),
            ],
            || {
                assert_eq!(
                    AuthConfig::from_env().unwrap_err(),
                    ConfigError::missing("JWT_SECRET")
                );
            },
        );
    }

    #[test]
    fn test_auth_config_from_env() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("jwt")),
                ("PRODUCT_KEY_SECRET", Some("pk")),
                ("JWT_TTL_SECONDS", Some("3600")),
                ("BCRYPT_COST", Some("12")),
            ],
            || {
                let config = AuthConfig::from_env().unwrap();
                assert_eq!(config.jwt.secret, "jwt");
                assert_eq!(config.product_key.secret, "pk");
                assert_eq!(config.token_ttl_seconds(), 3600);
                assert_eq!(config.hashing.cost, 12);
            },
        );
    }

    #[test]
    fn test_hashing_cost_out_of_range() {
        temp_env::with_var("BCRYPT_COST", Some("3"), || {
            assert!(matches!(
                HashingConfig::from_env(),
                Err(ConfigError::Invalid { .. })
            ));
        });
    }

    #[test]
    fn test_ttl_out_of_range_rejected() {
        for ttl in ["0", "-5", "1000000000000000", "9300000000000000"] {
            temp_env::with_vars(
                [("JWT_SECRET", Some("jwt")), ("JWT_TTL_SECONDS", Some(ttl))],
                || {
                    assert!(
                        matches!(JwtConfig::from_env(), Err(ConfigError::Invalid { .. })),
                        "ttl {} accepted",
                        ttl
                    );
                },
            );
        }

        let max = MAX_TOKEN_TTL_SECONDS.to_string();
        temp_env::with_vars(
            [("JWT_SECRET", Some("jwt")), ("JWT_TTL_SECONDS", Some(max.as_str()))],
            || {
                assert_eq!(JwtConfig::from_env().unwrap().ttl_seconds, MAX_TOKEN_TTL_SECONDS);
            },
        );
    }
}
