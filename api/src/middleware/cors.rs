//! CORS configuration for browser clients.
//!
//! Outside production every origin is accepted unless `ALLOWED_ORIGINS`
//! narrows it down. Production only ever admits the configured origins;
//! with none configured, cross-origin requests are refused.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use rh_shared::config::CorsConfig;
use rh_shared::Environment;
use tracing::info;

pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allowed_origins.is_empty() && !environment.is_production() {
        info!(%environment, "CORS accepts any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            info!(origin = %origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, environment: Environment, origin: &str) -> Option<String> {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config, environment))
                .route("/auth/signin", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/auth/signin")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[actix_web::test]
    async fn test_development_accepts_any_origin() {
        let allowed = preflight(
            CorsConfig::default(),
            Environment::Development,
            "http://localhost:3000",
        )
        .await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));
    }

    #[actix_web::test]
    async fn test_production_admits_configured_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.realtorhub.example".to_string()],
            ..CorsConfig::default()
        };
        let allowed = preflight(
            config,
            Environment::Production,
            "https://app.realtorhub.example",
        )
        .await;
        assert_eq!(allowed.as_deref(), Some("https://app.realtorhub.example"));
    }
}
