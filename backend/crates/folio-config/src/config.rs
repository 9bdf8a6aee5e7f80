use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Load a .env file from the working directory if present
    /// 5. Apply FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.api.validate()?;
        Ok(())
    }

    /// Absolute path of the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, seed: {})",
            self.database.path, self.database.max_connections, self.database.seed_sample_data
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  api: page size {} (max {})",
            self.api.default_page_size, self.api.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FOLIO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FOLIO_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("FOLIO_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FOLIO_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_bool(
            "FOLIO_DATABASE_SEED_SAMPLE_DATA",
            &mut self.database.seed_sample_data,
        );

        // Logging
        Self::apply_env_parse("FOLIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FOLIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FOLIO_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("FOLIO_LOG_DIR", &mut self.logging.dir);

        // Api
        Self::apply_env_parse(
            "FOLIO_API_DEFAULT_PAGE_SIZE",
            &mut self.api.default_page_size,
        );
        Self::apply_env_parse("FOLIO_API_MAX_PAGE_SIZE", &mut self.api.max_page_size);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
