//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse error category, used by the presentation layer to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Unauthorized,
    Forbidden,
    NotFound,
    Configuration,
    Internal,
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Configuration { .. } => ErrorKind::Configuration,
            DomainError::Database { .. } | DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Token(TokenError::GenerationFailed) => ErrorKind::Internal,
            DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Auth(err) => match err {
                AuthError::EmailTaken => ErrorKind::Conflict,
                AuthError::ProductKeyRequired
                | AuthError::InvalidProductKey
                | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
                AuthError::AccessDenied => ErrorKind::Forbidden,
            },
        }
    }
}

impl From<rh_shared::ConfigError> for DomainError {
    fn from(err: rh_shared::ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            DomainError::from(AuthError::EmailTaken).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            DomainError::from(AuthError::ProductKeyRequired).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            DomainError::from(AuthError::InvalidProductKey).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            DomainError::from(TokenError::Expired).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            DomainError::from(TokenError::GenerationFailed).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            DomainError::from(ValidationError::InvalidEmail).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            DomainError::from(AuthError::AccessDenied).kind(),
            ErrorKind::Forbidden
        );
    }

    #[test]
    fn test_transparent_messages() {
        let err = DomainError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = DomainError::from(ValidationError::required("name"));
        assert_eq!(err.to_string(), "Required field: name");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DomainError = rh_shared::ConfigError::missing("JWT_SECRET").into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
