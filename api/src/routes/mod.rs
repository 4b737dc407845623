//! HTTP routes and the permission table backing the role guard

pub mod auth;

use actix_web::web;
use rh_core::{RoutePermissions, UserRepository};

pub use auth::AppState;

/// Every guarded route in the application, assembled once at startup
pub fn route_permissions() -> RoutePermissions {
    auth::register_permissions(RoutePermissions::new())
}

pub fn configure<U: UserRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure::<U>);
}
