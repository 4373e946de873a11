//! Database service

use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument};

use crate::error::{DbError, DbResult};
use crate::pool::{create_pool, PgConnectionPool, Pool};

/// Service for running statements against a connection pool.
///
/// The pool is unset until [`connect`](Self::connect) succeeds. Queries are
/// forwarded to the pool without touching the statement or its parameters.
pub struct DatabaseService<P = PgConnectionPool> {
    url: String,
    pool: Option<P>,
}

impl<P> DatabaseService<P> {
    /// Create a new, unconnected service
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool: None,
        }
    }

    /// Connection URL this service was created with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The pool handle, if connected
    pub fn pool(&self) -> Option<&P> {
        self.pool.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Connect using `factory` to build the pool from the stored URL.
    ///
    /// Returns `true` once the pool is assigned. A second call replaces the
    /// previous handle. On error the current handle is left as it was.
    pub fn connect_with<F>(&mut self, factory: F) -> DbResult<bool>
    where
        F: FnOnce(&str) -> DbResult<P>,
    {
        let pool = factory(&self.url)?;

        if self.pool.replace(pool).is_some() {
            debug!("Replaced existing pool handle");
        } else {
            debug!("Database service connected");
        }

        Ok(true)
    }
}

impl DatabaseService<PgConnectionPool> {
    /// Establish the PostgreSQL pool for the stored URL
    ///
    /// No connection is opened here, but the pool starts a background
    /// maintenance task, so this must be called from within a Tokio runtime.
    pub fn connect(&mut self) -> DbResult<bool> {
        self.connect_with(create_pool)
    }
}

impl<P: Pool> DatabaseService<P> {
    /// Run `sql` with positional `params` on the pool
    #[instrument(skip(self, params), fields(params = params.len()))]
    pub async fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Value>> {
        let pool = self.pool.as_ref().ok_or(DbError::NotConnected)?;
        pool.execute(sql, params).await
    }
}

// The URL may carry credentials, so it is left out.
impl<P> fmt::Debug for DatabaseService<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseService")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
