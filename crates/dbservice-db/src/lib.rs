//! # dbservice-db
//!
//! A small database service on top of a PostgreSQL connection pool.
//!
//! ## Overview
//!
//! - [`DatabaseService`] holds a connection URL and, once connected, a pool
//!   handle. Queries are passed through to the pool unchanged.
//! - [`create_pool`] builds a lazily connecting pool bounded by
//!   [`MAX_CONNECTIONS`].
//! - [`Pool`] is the seam between the service and the pool implementation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dbservice_db::DatabaseService;
//! use serde_json::json;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut service = DatabaseService::new("postgres://localhost/app");
//!     service.connect()?;
//!
//!     let rows = service
//!         .query("SELECT id, name FROM users WHERE id = $1", &[json!(42)])
//!         .await?;
//!     println!("{rows:?}");
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod pool;
pub mod service;

// Re-export commonly used types
pub use constants::{MAX_CONNECTIONS, TIMEOUT};
pub use error::{DbError, DbResult};
pub use pool::{create_pool, create_pool_with_config, PgConnectionPool, Pool, PoolConfig};
pub use service::DatabaseService;
