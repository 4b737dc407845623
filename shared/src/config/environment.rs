//! Deployment environment and the logging defaults that follow from it

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{optional_var, ConfigError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// `ENVIRONMENT` (or `ENV`); unknown or missing values mean development
    pub fn from_env() -> Self {
        optional_var("ENVIRONMENT")
            .or_else(|| optional_var("ENV"))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("unknown environment {:?}", s)),
        }
    }
}

/// Subscriber output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("expected json, pretty or compact, got {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `rh_core=debug,warn`
    pub level: String,
    pub format: LogFormat,
    /// Emit file and line of each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Readable output while developing, JSON everywhere else
    pub fn for_environment(env: Environment) -> Self {
        let development = env.is_development();
        Self {
            level: if development { "debug" } else { "info" }.to_string(),
            format: if development { LogFormat::Pretty } else { LogFormat::Json },
            source_location: development,
        }
    }

    /// Environment defaults overridden by `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let mut config = Self::for_environment(env);
        if let Some(level) = optional_var("LOG_LEVEL") {
            config.level = level;
        }
        if let Some(format) = optional_var("LOG_FORMAT") {
            config.format = format
                .parse()
                .map_err(|reason: String| ConfigError::invalid("LOG_FORMAT", reason))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" Dev ".parse::<Environment>(), Ok(Environment::Development));
        assert!("qa".parse::<Environment>().is_err());
        assert_eq!(Environment::Staging.to_string(), "staging");
    }

    #[test]
    fn test_environment_from_env_falls_back() {
        temp_env::with_vars([("ENVIRONMENT", Some("qa")), ("ENV", None::<&str>)], || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
        temp_env::with_vars([("ENVIRONMENT", None), ("ENV", Some("production"))], || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });
    }

    #[test]
    fn test_logging_defaults_per_environment() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.format, LogFormat::Pretty);
        assert_eq!(dev.level, "debug");
        assert!(dev.source_location);

        let prod = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod.format, LogFormat::Json);
        assert_eq!(prod.level, "info");
    }

    #[test]
    fn test_logging_overrides() {
        temp_env::with_vars(
            [("LOG_LEVEL", Some("warn")), ("LOG_FORMAT", Some("compact"))],
            || {
                let config = LoggingConfig::from_env(Environment::Production).unwrap();
                assert_eq!(config.level, "warn");
                assert_eq!(config.format, LogFormat::Compact);
            },
        );

        temp_env::with_var("LOG_FORMAT", Some("xml"), || {
            assert!(LoggingConfig::from_env(Environment::Development).is_err());
        });
    }
}
