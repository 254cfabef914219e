//! Runtime settings read from the environment (after `.env`, if present).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/students";

/// Connection settings handed to [`crate::db::connect`].
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// PostgreSQL connection string.
    pub connection: String,
    /// Attempts after the first one when a transient connection error occurs.
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Applied as `statement_timeout` and as the pool acquire timeout.
    pub command_timeout: Duration,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            connection: DEFAULT_DATABASE_URL.into(),
            max_retries: 5,
            retry_delay: Duration::from_secs(10),
            command_timeout: Duration::from_secs(10),
            max_connections: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub store: StoreConfig,
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
    /// Run `CREATE TABLE IF NOT EXISTS students` at startup.
    pub ensure_schema: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source. Missing variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StoreConfig::default();
        let store = StoreConfig {
            connection: lookup("DATABASE_URL").unwrap_or(defaults.connection),
            max_retries: parse_or(&lookup, "DB_MAX_RETRIES", defaults.max_retries)?,
            retry_delay: Duration::from_secs(parse_or(
                &lookup,
                "DB_RETRY_DELAY_SECS",
                defaults.retry_delay.as_secs(),
            )?),
            command_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_COMMAND_TIMEOUT_SECS",
                defaults.command_timeout.as_secs(),
            )?),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        };
        Ok(Settings {
            store,
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            body_limit: parse_or(&lookup, "BODY_LIMIT_BYTES", 1024 * 1024)?,
            ensure_schema: parse_or(&lookup, "ENSURE_SCHEMA", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
