//! Authentication route handlers
//!
//! - Sign-up, with the role in the path or in the body
//! - Sign-in
//! - Product key issuance for administrators
//! - The current identity

pub mod me;
pub mod product_key;
pub mod signin;
pub mod signup;

use std::sync::Arc;

use actix_web::web;
use rh_core::{AuthService, RoutePermissions, UserRepository, UserRole};

use crate::middleware::RoleGuard;

pub const SIGN_UP: &str = "auth.signup";
pub const SIGN_IN: &str = "auth.signin";
pub const PRODUCT_KEY: &str = "auth.product_key";
pub const ME: &str = "auth.me";

/// Application state shared by the auth handlers
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}

impl<U: UserRepository> AppState<U> {
    pub fn new(auth_service: AuthService<U>) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
        }
    }
}

pub fn register_permissions(table: RoutePermissions) -> RoutePermissions {
    table
        .public(SIGN_UP)
        .public(SIGN_IN)
        .restricted(PRODUCT_KEY, [UserRole::Admin])
        .restricted(ME, UserRole::ALL)
}

pub fn configure<U: UserRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route(
                "/signup",
                web::post()
                    .to(signup::sign_up::<U>)
                    .wrap(RoleGuard::new(SIGN_UP)),
            )
            .route(
                "/signup/{role}",
                web::post()
                    .to(signup::sign_up_as::<U>)
                    .wrap(RoleGuard::new(SIGN_UP)),
            )
            .route(
                "/signin",
                web::post()
                    .to(signin::sign_in::<U>)
                    .wrap(RoleGuard::new(SIGN_IN)),
            )
            .route(
                "/key",
                web::post()
                    .to(product_key::issue_product_key::<U>)
                    .wrap(RoleGuard::new(PRODUCT_KEY)),
            )
            .route("/me", web::get().to(me::me).wrap(RoleGuard::new(ME))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_table() {
        let table = register_permissions(RoutePermissions::new());
        assert_eq!(table.len(), 4);
        assert!(table.roles_for(SIGN_UP).unwrap().is_public());
        assert!(table.roles_for(SIGN_IN).unwrap().is_public());

        let key_roles = table.roles_for(PRODUCT_KEY).unwrap();
        assert!(key_roles.permits(UserRole::Admin));
        assert!(!key_roles.permits(UserRole::Realtor));

        let me_roles = table.roles_for(ME).unwrap();
        assert!(UserRole::ALL.iter().all(|role| me_roles.permits(*role)));
    }
}
