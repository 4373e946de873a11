//! Pool defaults

/// Maximum number of connections a pool created by `create_pool` may open.
pub const MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a free connection before a query fails.
pub const TIMEOUT: u64 = 30;
