//! HTTP transport for the Realtor Hub credential core

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppServices};
pub use config::Config;
