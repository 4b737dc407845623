//! Role guard middleware for route admission.
//!
//! Each guarded route is wrapped with a [`RoleGuard`] naming its route id.
//! The guard hands the id and the raw `Authorization` header to the
//! [`AccessPolicy`] registered as app data and either forwards the request
//! or answers 403 itself. When an identity was resolved it is stored in the
//! request extensions, where handlers pick it up through [`CurrentUser`].

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use rh_core::{Access, AccessPolicy, DomainError, User};
use tracing::error;

use crate::handlers::ApiError;

/// The identity admitted by the role guard
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Only present behind a guard whose route admits specific roles
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or(ApiError::Forbidden),
        )
    }
}

/// Role guard middleware factory
pub struct RoleGuard {
    route: &'static str,
}

impl RoleGuard {
    pub fn new(route: &'static str) -> Self {
        Self { route }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RoleGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardMiddleware {
            service: Rc::new(service),
            route: self.route,
        }))
    }
}

pub struct RoleGuardMiddleware<S> {
    service: Rc<S>,
    route: &'static str,
}

impl<S, B> Service<ServiceRequest> for RoleGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let route = self.route;

        Box::pin(async move {
            let Some(policy) = req.app_data::<web::Data<Arc<dyn AccessPolicy>>>().cloned() else {
                error!(route, "No access policy registered");
                let err = ApiError::Domain(DomainError::Configuration {
                    message: "access policy missing".to_string(),
                });
                return Ok(reject(req, err));
            };

            let authorization = authorization_header(&req);
            match policy.resolve_route(route, authorization.as_deref()).await {
                Access::Public => {}
                Access::Granted(user) => {
                    req.extensions_mut().insert(CurrentUser(user));
                }
                Access::Denied(_) => return Ok(reject(req, ApiError::Forbidden)),
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Raw header value; a header that is not valid ASCII counts as absent
fn authorization_header(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn reject<B>(req: ServiceRequest, err: ApiError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(err.error_response()).map_into_right_body()
}
