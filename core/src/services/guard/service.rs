//! Authorization guard implementation
//!
//! The guard never returns an error. Every failure along the way (missing
//! header, bad token, unknown identity, store failure, role mismatch)
//! collapses to [`Access::Denied`], so authorization fails closed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{RoleSet, RoutePermissions};
use crate::errors::TokenError;
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was turned away. Kept for logs, never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    MalformedHeader,
    InvalidToken(TokenError),
    UnknownIdentity,
    LookupFailed,
    RoleNotPermitted,
    UnknownRoute,
}

/// Outcome of an authorization decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Route has no role restriction; no identity was resolved
    Public,
    /// Identity resolved from the token, holding a permitted role
    Granted(User),
    Denied(DenyReason),
}

impl Access {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Access::Denied(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Access::Granted(user) => Some(user),
            _ => None,
        }
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
pub fn extract_bearer(header: Option<&str>) -> Result<&str, DenyReason> {
    let header = header.ok_or(DenyReason::MissingToken)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .ok_or(DenyReason::MalformedHeader)?;
    if token.is_empty() {
        return Err(DenyReason::MalformedHeader);
    }
    Ok(token)
}

/// Trait for dynamic dispatch of route decisions, so transport middleware
/// does not carry the repository type parameter
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    async fn resolve_route(&self, route: &str, authorization: Option<&str>) -> Access;
}

/// Decides admission from the route's role set and the bearer token
pub struct AuthorizationGuard<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    routes: Arc<RoutePermissions>,
}

impl<U: UserRepository> AuthorizationGuard<U> {
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        routes: Arc<RoutePermissions>,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            routes,
        }
    }

    pub fn routes(&self) -> &RoutePermissions {
        &self.routes
    }

    /// Admit or deny against an explicit role set
    pub async fn decide(&self, required: &RoleSet, authorization: Option<&str>) -> bool {
        self.resolve(required, authorization).await.is_admitted()
    }

    /// Like [`decide`](Self::decide), but hands back the resolved identity
    pub async fn resolve(&self, required: &RoleSet, authorization: Option<&str>) -> Access {
        if required.is_public() {
            return Access::Public;
        }

        match self.identify(required, authorization).await {
            Ok(user) => Access::Granted(user),
            Err(reason) => {
                debug!(reason = ?reason, "Authorization denied");
                Access::Denied(reason)
            }
        }
    }

    async fn identify(&self, required: &RoleSet, authorization: Option<&str>) -> Result<User, DenyReason> {
        let token = extract_bearer(authorization)?;

        let claims = self
            .token_service
            .verify(token)
            .map_err(DenyReason::InvalidToken)?;

        // The token carries no role; the store is the source of truth for it
        let user = self
            .user_repository
            .find_by_id(claims.id)
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity lookup failed during authorization");
                DenyReason::LookupFailed
            })?
            .ok_or(DenyReason::UnknownIdentity)?;

        if !required.permits(user.role) {
            return Err(DenyReason::RoleNotPermitted);
        }

        Ok(user)
    }
}

#[async_trait]
impl<U: UserRepository> AccessPolicy for AuthorizationGuard<U> {
    /// A route id missing from the table is denied
    async fn resolve_route(&self, route: &str, authorization: Option<&str>) -> Access {
        match self.routes.roles_for(route) {
            Some(required) => self.resolve(required, authorization).await,
            None => {
                debug!(route, "Authorization denied for unregistered route");
                Access::Denied(DenyReason::UnknownRoute)
            }
        }
    }
}
