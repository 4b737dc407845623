//! Mint a product key offline, e.g. for the first administrator.
//!
//! Reads the same `PRODUCT_KEY_SECRET` and `BCRYPT_COST` as the server, so
//! the printed key verifies against a running instance.

use clap::Parser;
use rh_api::telemetry;
use rh_core::{ProductKeyService, SecretHasher, UserRole};
use rh_shared::config::auth::DEFAULT_HASH_COST;
use rh_shared::config::{HashingConfig, LogFormat};
use rh_shared::utils::email::normalize_email;
use rh_shared::{Environment, LoggingConfig, ProductKeyConfig};

#[derive(Parser)]
#[command(name = "rh_keygen", about = "Mint a Realtor Hub product key")]
struct Args {
    /// E-mail the key is bound to
    #[arg(long)]
    email: String,

    /// Role the key admits (BUYER, REALTOR or ADMIN)
    #[arg(long)]
    role: UserRole,

    /// Shared product-key secret
    #[arg(long, env = "PRODUCT_KEY_SECRET", hide_env_values = true)]
    secret: String,

    /// bcrypt work factor
    #[arg(
        long,
        env = "BCRYPT_COST",
        default_value_t = DEFAULT_HASH_COST,
        value_parser = clap::value_parser!(u32).range(4..=31)
    )]
    cost: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Events go to stderr; stdout carries only the key
    let mut logging = LoggingConfig::from_env(Environment::from_env())?;
    logging.format = LogFormat::Compact;
    telemetry::init_tracing_with_writer(&logging, std::io::stderr)?;

    if args.secret.trim().is_empty() {
        anyhow::bail!("PRODUCT_KEY_SECRET must not be empty");
    }

    let hasher = SecretHasher::from_config(&HashingConfig { cost: args.cost });
    let keys = ProductKeyService::new(&ProductKeyConfig::new(args.secret), hasher);

    let email = normalize_email(&args.email);
    let key = keys.mint(&email, args.role).await?;
    println!("{}", key);
    Ok(())
}
