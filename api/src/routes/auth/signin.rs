use actix_web::{web, HttpResponse};
use rh_core::UserRepository;
use validator::Validate;

use super::AppState;
use crate::dto::{SignInRequest, TokenResponse};
use crate::handlers::ApiError;

/// `POST /auth/signin`
pub async fn sign_in<U: UserRepository + 'static>(
    state: web::Data<AppState<U>>,
    body: web::Json<SignInRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let response = state.auth_service.sign_in(request.into()).await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: response.token,
    }))
}
