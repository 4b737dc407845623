//! Role permission sets and the route permission table.
//!
//! Every protected route declares the roles it admits when the router is
//! built. The table is assembled once at startup and only read afterwards,
//! so it is shared behind an `Arc` without any locking.

use std::collections::{BTreeSet, HashMap};

use crate::domain::entities::user::UserRole;

/// Roles permitted on a route. An empty set marks a public route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<UserRole>);

impl RoleSet {
    /// A route without role restriction
    pub fn public() -> Self {
        Self(BTreeSet::new())
    }

    /// A route open to every signed-in role
    pub fn any_role() -> Self {
        Self::of(UserRole::ALL)
    }

    pub fn of(roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn is_public(&self) -> bool {
        self.0.is_empty()
    }

    pub fn permits(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRole> {
        self.0.iter()
    }
}

impl FromIterator<UserRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = UserRole>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Static mapping from route identifier to permitted roles
#[derive(Debug, Clone, Default)]
pub struct RoutePermissions {
    routes: HashMap<String, RoleSet>,
}

impl RoutePermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route that admits everyone
    pub fn public(self, route: impl Into<String>) -> Self {
        self.register(route, RoleSet::public())
    }

    /// Register a route admitting only the given roles
    pub fn restricted(self, route: impl Into<String>, roles: impl IntoIterator<Item = UserRole>) -> Self {
        self.register(route, RoleSet::of(roles))
    }

    /// Register a route with an explicit role set. Re-registering replaces the entry.
    pub fn register(mut self, route: impl Into<String>, roles: RoleSet) -> Self {
        self.routes.insert(route.into(), roles);
        self
    }

    /// Roles for a route, `None` when the route was never registered
    pub fn roles_for(&self, route: &str) -> Option<&RoleSet> {
        self.routes.get(route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
