//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenSubject};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Service for minting and verifying signed session tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance keyed by the configured secret
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked by hand after the signature so the two failures stay distinct
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mints a token for `subject` valid for `ttl` from now
    pub fn mint(&self, subject: &TokenSubject, ttl: Duration) -> Result<String, TokenError> {
        self.mint_at(subject, Utc::now(), ttl)
    }

    /// Mints a token as if issued at `issued_at`
    pub fn mint_at(
        &self,
        subject: &TokenSubject,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::issue(subject, issued_at, ttl)?;
        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies a token against the current time
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - signature valid and not expired
    /// * `Err(TokenError::Forged)` - signature or algorithm mismatch
    /// * `Err(TokenError::Expired)` - authentic but past its expiry
    /// * `Err(TokenError::Malformed)` - anything that does not parse as a token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token against an explicit clock reading
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::Forged,
                _ => TokenError::Malformed,
            })?;

        if token_data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}
