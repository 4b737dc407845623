use actix_web::HttpResponse;

use crate::dto::CurrentUserResponse;
use crate::middleware::CurrentUser;

/// `GET /auth/me`: the live record the role guard resolved
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(CurrentUserResponse::from(user.into_inner()))
}
