//! Pool construction with a bounded retry policy for transient connection failures.

use crate::config::StoreConfig;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::future::Future;
use std::str::FromStr;

/// Errors worth another attempt: the server was unreachable or the pool could not hand out a connection.
pub fn is_transient(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut
    )
}

/// Connection options with the command timeout applied as `statement_timeout`.
pub fn connect_options(config: &StoreConfig) -> Result<PgConnectOptions, AppError> {
    let timeout_ms = config.command_timeout.as_millis().to_string();
    let opts = PgConnectOptions::from_str(&config.connection)
        .map_err(|e| ConfigError::Connection(e.to_string()))?
        .options([("statement_timeout", timeout_ms.as_str())]);
    Ok(opts)
}

pub fn pool_options(config: &StoreConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.command_timeout)
}

/// Build the pool and open a first connection, retrying transient failures.
pub async fn connect(config: &StoreConfig) -> Result<PgPool, AppError> {
    let opts = connect_options(config)?;
    retry_transient(config, "connect", || {
        pool_options(config).connect_with(opts.clone())
    })
    .await
}

/// Run `op`, retrying up to `config.max_retries` more times while it fails transiently.
pub async fn retry_transient<T, F, Fut>(
    config: &StoreConfig,
    what: &str,
    mut op: F,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(v) => return Ok(v),
            Err(e) if is_transient(&e) && attempt < config.max_retries => {
                attempt += 1;
                tracing::warn!(
                    operation = what,
                    attempt,
                    max_retries = config.max_retries,
                    error = %e,
                    "transient database error, retrying"
                );
                tokio::time::sleep(config.retry_delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Run a write statement exactly once.
///
/// A transient error can arrive after the server already committed, so writes are
/// never replayed; the error goes straight back to the caller.
pub async fn execute_once<T, F, Fut>(what: &str, op: F) -> Result<T, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    op().await.map_err(|e| {
        if is_transient(&e) {
            tracing::warn!(
                operation = what,
                error = %e,
                "write failed on a transient error, not retried"
            );
        }
        e.into()
    })
}
