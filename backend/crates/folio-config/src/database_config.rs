use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    /// Insert the sample projects on start-up when the table is empty
    pub seed_sample_data: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            seed_sample_data: false,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
