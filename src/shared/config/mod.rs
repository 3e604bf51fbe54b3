//! Application configuration module
//!
//! Provides the runtime configuration for the server: listening port,
//! optional database URL, token signing key and lifetime, and password
//! hashing cost. Values come from the environment (see [`AppConfig::from_env`])
//! or from [`AppConfigBuilder`] in tests.

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5050;

/// Default token validity window in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

/// Upper bound for `TOKEN_TTL_HOURS` (100 years)
pub const MAX_TOKEN_TTL_HOURS: i64 = 100 * 365 * 24;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HMAC key used to sign and verify tokens
    pub jwt_secret: String,
    /// Token validity window in hours
    pub token_ttl_hours: i64,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `SERVER_PORT`, `DATABASE_URL`, `JWT_SECRET`, `TOKEN_TTL_HOURS`
    /// and `BCRYPT_COST`. Unset variables fall back to defaults; set but
    /// unparsable ones are errors.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(port) = env_var("SERVER_PORT") {
            builder = builder.server_port(parse_var("SERVER_PORT", &port)?);
        }
        if let Some(url) = env_var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = env_var("TOKEN_TTL_HOURS") {
            builder = builder.token_ttl_hours(parse_var("TOKEN_TTL_HOURS", &ttl)?);
        }
        if let Some(cost) = env_var("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                value: self.token_ttl_hours.to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_hours: Option<i64>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing key
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token validity window
    pub fn token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = Some(hours);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    ///
    /// When no signing key was supplied a random one is generated for this
    /// process; tokens it signs stop verifying after a restart.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = match self.jwt_secret {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set. Using a random signing key for this process.");
                ephemeral_secret()
            }
        };

        let config = AppConfig {
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            jwt_secret,
            token_ttl_hours: self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn ephemeral_secret() -> String {
    format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
}
