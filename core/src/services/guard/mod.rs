//! Authorization guard: per-request admission decisions

mod service;


pub use service::{extract_bearer, Access, AccessPolicy, AuthorizationGuard, DenyReason};
