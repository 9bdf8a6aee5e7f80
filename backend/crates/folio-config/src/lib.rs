mod api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".folio";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "folio.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
const MAX_MAX_PAGE_SIZE: u32 = 1000;
