//! Authentication service module
//!
//! Password sign-up and sign-in over the record store:
//! - Product-key gating of non-buyer registration
//! - E-mail uniqueness, delegated to the store for concurrent races
//! - Token issuance on success

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
