use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, MAX_MAX_PAGE_SIZE,
};

use folio_core::PageLimits;

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Page size when a list request gives no usable `limit`
    pub default_page_size: u32,
    /// Upper bound applied to every list request
    pub max_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(1..=MAX_MAX_PAGE_SIZE).contains(&self.max_page_size) {
            return Err(ConfigError::api(format!(
                "api.max_page_size must be 1-{}, got {}",
                MAX_MAX_PAGE_SIZE, self.max_page_size
            )));
        }

        if !(1..=self.max_page_size).contains(&self.default_page_size) {
            return Err(ConfigError::api(format!(
                "api.default_page_size must be 1-{} (api.max_page_size), got {}",
                self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_size: i64::from(self.default_page_size),
            max_size: i64::from(self.max_page_size),
        }
    }
}
