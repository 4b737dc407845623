use actix_web::{web, HttpResponse};
use rh_core::{UserRepository, UserRole, ValidationError};
use validator::Validate;

use super::AppState;
use crate::dto::{SignUpRequest, TokenResponse};
use crate::handlers::ApiError;

/// `POST /auth/signup` with the role in the body
pub async fn sign_up<U: UserRepository + 'static>(
    state: web::Data<AppState<U>>,
    body: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError> {
    register(&state, None, body.into_inner()).await
}

/// `POST /auth/signup/{role}`
pub async fn sign_up_as<U: UserRepository + 'static>(
    state: web::Data<AppState<U>>,
    path: web::Path<String>,
    body: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError> {
    register(&state, Some(path.into_inner()), body.into_inner()).await
}

async fn register<U: UserRepository>(
    state: &AppState<U>,
    path_role: Option<String>,
    request: SignUpRequest,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let role = resolve_role(path_role.as_deref(), request.role.as_deref())?;

    let response = state
        .auth_service
        .sign_up(request.into_command(role))
        .await?;

    Ok(HttpResponse::Created().json(TokenResponse {
        token: response.token,
    }))
}

pub(crate) fn parse_role(raw: &str) -> Result<UserRole, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::invalid_format("role"))
}

/// Path and body may both name the role, but must agree
fn resolve_role(path: Option<&str>, body: Option<&str>) -> Result<UserRole, ValidationError> {
    let path = path.map(parse_role).transpose()?;
    let body = body.map(parse_role).transpose()?;

    match (path, body) {
        (Some(from_path), Some(from_body)) if from_path != from_body => {
            Err(ValidationError::invalid_format("role"))
        }
        (Some(role), _) | (None, Some(role)) => Ok(role),
        (None, None) => Err(ValidationError::required("role")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_either_place() {
        assert_eq!(resolve_role(Some("realtor"), None), Ok(UserRole::Realtor));
        assert_eq!(resolve_role(None, Some("BUYER")), Ok(UserRole::Buyer));
        assert_eq!(resolve_role(Some("admin"), Some("ADMIN")), Ok(UserRole::Admin));
    }

    #[test]
    fn test_role_conflicts_and_gaps() {
        assert_eq!(
            resolve_role(Some("REALTOR"), Some("BUYER")),
            Err(ValidationError::invalid_format("role"))
        );
        assert_eq!(
            resolve_role(Some("landlord"), None),
            Err(ValidationError::invalid_format("role"))
        );
        assert_eq!(resolve_role(None, None), Err(ValidationError::required("role")));
    }
}
