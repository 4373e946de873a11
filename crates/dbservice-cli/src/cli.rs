//! Command-line arguments

use clap::Parser;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
    name = "dbservice",
    version,
    allow_negative_numbers = true,
    about = "Run one SQL statement and print the rows as JSON",
    long_about = "Connects with DATABASE_URL (read from the environment or a .env file), \
                  runs SQL with the given positional parameters and prints the resulting \
                  rows as a JSON array."
)]
pub struct Cli {
    /// Statement to run, with $1..$n placeholders
    pub sql: String,

    /// Parameters for $1..$n, parsed as JSON (bare words are taken as strings).
    ///
    /// Numbers and booleans bind with their own types. `null` and strings bind
    /// as text, so cast the placeholder when the target column is not text,
    /// e.g. `INSERT INTO t (n) VALUES ($1::int)`.
    #[arg(value_parser = parse_param)]
    pub params: Vec<Value>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

/// Parse a parameter as JSON, falling back to a plain string
#[allow(clippy::unnecessary_wraps)]
fn parse_param(raw: &str) -> Result<Value, String> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}
