//! Application state and factory
//!
//! This module wires the credential services into Actix-web app data and
//! builds the application with its middleware stack.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use rh_core::{
    AccessPolicy, AuthService, AuthServiceConfig, AuthorizationGuard, ProductKeyService,
    SecretHasher, TokenService, TokenServiceConfig, UserRepository,
};
use rh_shared::{error_codes, AuthConfig, Environment, ErrorResponse, ServerConfig};
use tracing_actix_web::TracingLogger;

use crate::handlers::ApiError;
use crate::middleware::create_cors;
use crate::routes::{self, route_permissions, AppState};

/// Everything the handlers and the role guard read from app data
pub struct AppServices<U: UserRepository> {
    pub state: web::Data<AppState<U>>,
    pub policy: web::Data<Arc<dyn AccessPolicy>>,
}

impl<U: UserRepository + 'static> AppServices<U> {
    /// Build the credential services over one shared user store
    pub fn new(repository: Arc<U>, config: &AuthConfig) -> Self {
        let hasher = SecretHasher::from_config(&config.hashing);
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
        let product_keys = Arc::new(ProductKeyService::new(&config.product_key, hasher));

        let auth_service = AuthService::new(
            Arc::clone(&repository),
            hasher,
            Arc::clone(&token_service),
            product_keys,
            AuthServiceConfig::from(config),
        );
        let guard = AuthorizationGuard::new(repository, token_service, Arc::new(route_permissions()));

        Self {
            state: web::Data::new(AppState::new(auth_service)),
            policy: web::Data::new(Arc::new(guard) as Arc<dyn AccessPolicy>),
        }
    }
}

impl<U: UserRepository> Clone for AppServices<U> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            policy: self.policy.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U: UserRepository + 'static>(
    services: &AppServices<U>,
    server: &ServerConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into());

    App::new()
        .app_data(services.state.clone())
        .app_data(services.policy.clone())
        .app_data(json_config)
        .wrap(create_cors(&server.cors, environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(routes::configure::<U>)
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler; never touches the user store
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "realtor-hub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
