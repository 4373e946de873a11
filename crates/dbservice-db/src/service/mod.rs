//! Query service
//!
//! Owns the connection URL and, once connected, the pool handle.

mod database;

pub use database::DatabaseService;
