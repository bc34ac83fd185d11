//! PostgreSQL pool backing the identity store.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use sessionhub_core::config::DatabaseConfig;
use sessionhub_core::error::{AppError, ErrorKind};

/// Pool of connections to the database that holds user records.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens the pool. Fails if no connection can be acquired within the
    /// configured timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            acquire_timeout_s = config.connect_timeout_seconds,
            idle_timeout_s = config.idle_timeout_seconds,
            "Opening identity store pool"
        );

        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to identity store: {e}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips a trivial query. An unexpected answer is reported as the
    /// store being unavailable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        let value = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;

        if value == 1 {
            Ok(())
        } else {
            Err(AppError::service_unavailable(format!(
                "Health check returned {value}"
            )))
        }
    }

    /// Closes every connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        let in_use = (self.pool.size() as usize).saturating_sub(self.pool.num_idle());
        if in_use > 0 {
            warn!(in_use, "Closing identity store pool with connections in use");
        }
        self.pool.close().await;
        info!("Identity store pool closed");
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Replaces the password in a connection URL with `****`.
fn mask_password(url: &str) -> String {
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at) = url[scheme_end..].rfind('@').map(|p| scheme_end + p) else {
        return url.to_string();
    };
    match url[scheme_end..at].find(':') {
        Some(colon) => format!("{}:****{}", &url[..scheme_end + colon], &url[at..]),
        None => url.to_string(),
    }
}
