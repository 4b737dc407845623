use rh_shared::{AuthConfig, ConfigError, DatabaseConfig, Environment, LoggingConfig, ServerConfig};

/// Process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    /// `None` selects the in-memory user store
    pub database: Option<DatabaseConfig>,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        let database = DatabaseConfig::from_env()?;
        if environment.is_production() && database.is_none() {
            return Err(ConfigError::missing("DATABASE_URL"));
        }

        Ok(Config {
            environment,
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            database,
            logging: LoggingConfig::from_env(environment)?,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
