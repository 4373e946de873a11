//! Connection pool seam and the PostgreSQL adapter

mod params;
mod postgres;
mod rows;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DbResult;

pub use postgres::{create_pool, create_pool_with_config, PgConnectionPool, PoolConfig};

/// Anything that can execute a statement with positional parameters.
///
/// Parameters and rows are JSON values; a row is an object keyed by column
/// name.
#[async_trait]
pub trait Pool: Send + Sync {
    async fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Value>>;
}
