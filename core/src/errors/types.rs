//! Domain-specific error types for credential and token operations
//!
//! Messages here are stable English text. The presentation layer maps each
//! variant to a status code and machine-readable error code.

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Product key is required for this role")]
    ProductKeyRequired,

    #[error("Invalid product key")]
    InvalidProductKey,

    /// Shared by unknown e-mail and wrong password so callers cannot probe accounts
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Access denied")]
    AccessDenied,
}

/// Token verification and minting failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature does not match the configured secret, or the algorithm was tampered with
    #[error("Token signature is invalid")]
    Forged,

    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength { field: String, min: usize, max: usize },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
        }
    }
}
