//! Database service errors

use thiserror::Error;

/// Errors raised by the pool adapter and the service
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Invalid pool configuration: {0}")]
    InvalidConfig(String),

    #[error("Database service is not connected")]
    NotConnected,

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Failed to decode column {column}: {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Get error code for logs and CLI output
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::NotConnected => "NOT_CONNECTED",
            Self::Query(_) => "QUERY_FAILED",
            Self::Decode { .. } => "DECODE_FAILED",
        }
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
