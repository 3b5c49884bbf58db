//! Dashboard server configuration

use serde::Deserialize;

use core_kernel::CoreError;
use domain_claims::DEFAULT_HOSPITAL_COUNT;

/// Environment variable prefix, e.g. `DASHBOARD_PORT`
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path of the claims CSV
    pub data_path: String,
    /// How many hospitals are pre-selected on first visit
    pub default_hospital_count: usize,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            data_path: "hospital_data.csv".to_string(),
            default_hospital_count: DEFAULT_HOSPITAL_COUNT,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `DASHBOARD_*` environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = ApiConfig::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_path", defaults.data_path)?
            .set_default("default_hospital_count", defaults.default_hospital_count as i64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the server cannot start with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.data_path.trim().is_empty() {
            return Err(CoreError::configuration("data_path must not be empty"));
        }
        if self.port == 0 {
            return Err(CoreError::configuration("port must not be zero"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
