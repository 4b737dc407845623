//! Mapping from domain failures to HTTP responses
//!
//! Every failure leaving a handler or the role guard passes through
//! [`ApiError`], so the status code follows the error kind and the body is
//! always an [`ErrorResponse`]. Internal details are logged, never returned.

use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rh_core::{AuthError, DomainError, ErrorKind, TokenError};
use rh_shared::{error_codes, ErrorResponse};
use thiserror::Error;
use tracing::error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Request validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Body that could not be deserialized at all
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The role guard turned the request away
    #[error("Forbidden resource")]
    Forbidden,
}

impl ApiError {
    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(err) => domain_body(err),
            ApiError::Validation(errors) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
                    .add_detail("fields", field_messages(errors))
            }
            ApiError::MalformedBody(reason) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Malformed request body")
                    .add_detail("reason", reason)
            }
            ApiError::Forbidden => ErrorResponse::new(error_codes::FORBIDDEN, "Forbidden resource"),
        }
    }
}

impl From<rh_core::ValidationError> for ApiError {
    fn from(err: rh_core::ValidationError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
                ErrorKind::Forbidden => StatusCode::FORBIDDEN,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

fn domain_body(err: &DomainError) -> ErrorResponse {
    match err {
        DomainError::Auth(auth) => match auth {
            AuthError::ProductKeyRequired => {
                ErrorResponse::new(error_codes::PRODUCT_KEY_REQUIRED, "The product key is required")
            }
            AuthError::InvalidProductKey => {
                ErrorResponse::new(error_codes::PRODUCT_KEY_INVALID, "Invalid product key")
            }
            AuthError::InvalidCredentials => {
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials")
            }
            AuthError::EmailTaken => ErrorResponse::new(
                error_codes::EMAIL_TAKEN,
                "An account with this email already exists",
            ),
            AuthError::AccessDenied => {
                ErrorResponse::new(error_codes::FORBIDDEN, "Forbidden resource")
            }
        },
        DomainError::Token(TokenError::Expired) => {
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token has expired")
        }
        DomainError::Token(TokenError::GenerationFailed) => internal_body(err),
        DomainError::Token(_) => ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid token"),
        DomainError::Validation(validation) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, validation.to_string())
        }
        DomainError::NotFound { .. } => ErrorResponse::new(error_codes::NOT_FOUND, err.to_string()),
        DomainError::Configuration { .. } | DomainError::Database { .. } | DomainError::Internal { .. } => {
            internal_body(err)
        }
    }
}

fn internal_body(err: &DomainError) -> ErrorResponse {
    error!(error = %err, "Request failed with an internal error");
    ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_MESSAGE)
}

/// Field name to messages, falling back to the validator code
fn field_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let messages = failures
                .iter()
                .map(|failure| {
                    failure
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| failure.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
