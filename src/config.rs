use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),

    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// # Service Configuration
///
/// Read once at start-up. `MONGO_URL` and `DB_NAME` are mandatory and have no
/// defaults; a missing or blank value keeps the service from starting.
///
/// | Variable    | Default     |
/// |-------------|-------------|
/// | `MONGO_URL` | required    |
/// | `DB_NAME`   | required    |
/// | `HOST`      | `127.0.0.1` |
/// | `PORT`      | `8080`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns `None` for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value.to_string())
        };

        let mongo_url = required("MONGO_URL")?;
        let db_name = required("DB_NAME")?;

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_url,
            db_name,
            host,
            port,
        })
    }
}
