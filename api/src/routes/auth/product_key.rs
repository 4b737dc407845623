use actix_web::{web, HttpResponse};
use rh_core::UserRepository;
use validator::Validate;

use super::signup::parse_role;
use super::AppState;
use crate::dto::{ProductKeyRequest, ProductKeyResponse};
use crate::handlers::ApiError;

/// `POST /auth/key`, admitted for administrators only
pub async fn issue_product_key<U: UserRepository + 'static>(
    state: web::Data<AppState<U>>,
    body: web::Json<ProductKeyRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;
    let role = parse_role(&request.role)?;

    let key = state
        .auth_service
        .issue_product_key(&request.email, role)
        .await?;

    Ok(HttpResponse::Ok().json(ProductKeyResponse { key }))
}
