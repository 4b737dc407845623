use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use rh_api::{create_app, telemetry, AppServices, Config};
use rh_core::{InMemoryUserRepository, UserRepository};
use rh_infra::{DatabasePool, MySqlUserRepository};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting Realtor Hub API");

    match config.database.clone() {
        Some(database) => {
            let pool = DatabasePool::new(database)
                .await
                .context("failed to connect to the database")?;
            pool.run_migrations()
                .await
                .context("failed to run database migrations")?;
            if !pool.health_check().await.context("database health check failed")? {
                anyhow::bail!("database health check returned an unexpected value");
            }
            info!(stats = %pool.get_statistics(), "Database ready");

            let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let result = run_server(&config, repository).await;
            pool.close().await;
            result
        }
        None => {
            warn!("DATABASE_URL is not set, users are kept in memory and lost on restart");
            run_server(&config, Arc::new(InMemoryUserRepository::new())).await
        }
    }
}

async fn run_server<U: UserRepository + 'static>(
    config: &Config,
    repository: Arc<U>,
) -> anyhow::Result<()> {
    let services = AppServices::new(repository, &config.auth);
    let server_config = config.server.clone();
    let environment = config.environment;

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server =
        HttpServer::new(move || create_app(&services, &server_config, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
