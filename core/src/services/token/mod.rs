//! Token service module for stateless session tokens
//!
//! Tokens are HS256 JWTs carrying `{name, id, iat, exp}`. There is no
//! revocation list: a token stays valid until its expiry.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
