#![allow(dead_code)]

use std::sync::Arc;

use rh_api::AppServices;
use rh_core::InMemoryUserRepository;
use rh_shared::config::{HashingConfig, JwtConfig, ProductKeyConfig};
use rh_shared::AuthConfig;
use serde_json::{json, Value};

pub const JWT_SECRET: &str = "api-test-jwt-secret";
pub const PRODUCT_KEY_SECRET: &str = "api-test-product-key-secret";

/// Send a request and read the JSON body back as `(status, body)`
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Build the application under test over the given services
macro_rules! test_app {
    ($services:expr) => {
        actix_web::test::init_service(rh_api::create_app(
            &$services,
            &rh_shared::ServerConfig::default(),
            rh_shared::Environment::Development,
        ))
        .await
    };
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new(JWT_SECRET),
        product_key: ProductKeyConfig::new(PRODUCT_KEY_SECRET),
        hashing: HashingConfig { cost: 4 },
    }
}

pub fn services() -> AppServices<InMemoryUserRepository> {
    services_over(Arc::new(InMemoryUserRepository::new()))
}

pub fn services_over(repository: Arc<InMemoryUserRepository>) -> AppServices<InMemoryUserRepository> {
    AppServices::new(repository, &auth_config())
}

pub fn sign_up_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "phone": "555-123-4567",
        "email": email,
        "password": "correct horse",
    })
}

pub fn with_key(mut body: Value, key: &str) -> Value {
    body["productKey"] = json!(key);
    body
}

pub fn bearer(token: &Value) -> (&'static str, String) {
    let token = token.as_str().unwrap_or_default();
    ("Authorization", format!("Bearer {}", token))
}
