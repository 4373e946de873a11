//! dbservice entry point
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgres://localhost/app cargo run -p dbservice-cli -- 'SELECT $1::int AS n' 1
//! ```

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use dbservice_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use dbservice_db::{create_pool_with_config, DatabaseService, PoolConfig};
use tracing::{error, info};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "dbservice failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(app = %config.app.name, env = ?config.app.env, "Configuration loaded");

    let mut service = DatabaseService::new(config.database.url.clone());
    service
        .connect_with(|url| {
            create_pool_with_config(&PoolConfig {
                url: url.to_string(),
                ..PoolConfig::from(&config.database)
            })
        })
        .context("Failed to create connection pool")?;

    let rows = service
        .query(&cli.sql, &cli.params)
        .await
        .context("Query failed")?;

    info!(rows = rows.len(), "Query finished");

    let output = if cli.compact {
        serde_json::to_string(&rows)?
    } else {
        serde_json::to_string_pretty(&rows)?
    };
    println!("{output}");

    Ok(())
}
