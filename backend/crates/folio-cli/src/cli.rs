use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const SERVER_URL_ENV: &str = "FOLIO_SERVER_URL";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Manage the projects shown on a portfolio site")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (falls back to FOLIO_SERVER_URL, then http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

/// Explicit flag > environment > default
pub fn resolve_server_url(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}
