//! PostgreSQL connection pool adapter

use async_trait::async_trait;
use dbservice_common::DatabaseConfig;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, instrument};

use super::params::bind_params;
use super::rows::row_to_json;
use super::Pool;
use crate::constants::{MAX_CONNECTIONS, TIMEOUT};
use crate::error::{DbError, DbResult};

/// Pool configuration
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_size: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    /// Config for `url` with the default bounds
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(TIMEOUT),
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_size: config.max_connections.unwrap_or(MAX_CONNECTIONS),
            acquire_timeout: Duration::from_secs(config.timeout_secs.unwrap_or(TIMEOUT)),
        }
    }
}

/// A lazily connecting PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgConnectionPool {
    pool: PgPool,
    url: String,
}

impl PgConnectionPool {
    /// URL the pool was created from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Upper bound on open connections
    pub fn max_size(&self) -> u32 {
        self.pool.options().get_max_connections()
    }

    /// Time a query waits for a free connection
    pub fn acquire_timeout(&self) -> Duration {
        self.pool.options().get_acquire_timeout()
    }

    /// The underlying SQLx pool
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Pool for PgConnectionPool {
    #[instrument(skip(self, params), fields(params = params.len()))]
    async fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Value>> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "Statement executed");

        rows.iter().map(row_to_json).collect()
    }
}

/// Create a pool for `url` bounded by [`MAX_CONNECTIONS`]
///
/// No connection is opened until the first query. Must be called from
/// within a Tokio runtime.
pub fn create_pool(url: &str) -> DbResult<PgConnectionPool> {
    create_pool_with_config(&PoolConfig::new(url))
}

/// Create a pool with explicit bounds
pub fn create_pool_with_config(config: &PoolConfig) -> DbResult<PgConnectionPool> {
    if config.max_size == 0 {
        return Err(DbError::InvalidConfig(
            "max_size must be at least 1".to_string(),
        ));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_size)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.url)
        .map_err(DbError::InvalidUrl)?;

    debug!(
        max_size = config.max_size,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "Created PostgreSQL pool"
    );

    Ok(PgConnectionPool {
        pool,
        url: config.url.clone(),
    })
}
