//! Token entities for stateless session tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Session token lifetime (7 days)
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Default session token lifetime
pub fn default_token_ttl() -> Duration {
    Duration::days(TOKEN_EXPIRY_DAYS)
}

/// Identity asserted by a token: who the bearer is, nothing about what they may do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSubject {
    pub name: String,
    pub id: i64,
}

impl TokenSubject {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the identity
    pub name: String,

    /// Store id of the identity
    pub id: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued at `issued_at` and expiring `ttl` later.
    /// An expiry past the representable calendar is a generation failure.
    pub fn issue(
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expiry = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenError::GenerationFailed)?;
        Ok(Self {
            name: subject.name.clone(),
            id: subject.id,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// A token stays valid up to and including its expiry second
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn subject(&self) -> TokenSubject {
        TokenSubject::new(self.name.clone(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_issued_at_plus_ttl() {
        let now = Utc::now();
        let claims =
            Claims::issue(&TokenSubject::new("Alice", 7), now, default_token_ttl()).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let claims =
            Claims::issue(&TokenSubject::new("Bob", 1), now, Duration::seconds(60)).unwrap();

        assert!(!claims.is_expired_at(now + Duration::seconds(60)));
        assert!(claims.is_expired_at(now + Duration::seconds(61)));
    }

    #[test]
    fn test_unrepresentable_expiry_fails() {
        let result = Claims::issue(
            &TokenSubject::new("Carl", 2),
            Utc::now(),
            Duration::seconds(1_000_000_000_000_000),
        );
        assert_eq!(result, Err(TokenError::GenerationFailed));
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = Claims {
            name: "Alice".to_string(),
            id: 3,
            iat: 100,
            exp: 200,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Alice", "id": 3, "iat": 100, "exp": 200}));
        assert_eq!(claims.subject(), TokenSubject::new("Alice", 3));
    }
}
