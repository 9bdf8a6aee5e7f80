use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        // Port 0 lets the OS pick a free port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        Ok(())
    }
}
