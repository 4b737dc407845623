//! Configuration for the authentication service

use chrono::Duration;
use rh_shared::AuthConfig;

use crate::domain::entities::token::default_token_ttl;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of tokens minted on sign-up and sign-in
    pub token_ttl: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token_ttl: default_token_ttl(),
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            token_ttl: Duration::seconds(config.token_ttl_seconds()),
        }
    }
}
