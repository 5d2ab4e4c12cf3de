use crate::core::{HarnessError, Result};
use serde::Deserialize;

pub mod api;
pub mod database;

pub use api::{AdminAuth, ApiConfig};
pub use database::DatabaseConfig;

/// Everything a scenario or probe needs to reach the system under test.
///
/// Passed explicitly into runners and fixtures; nothing reads a global.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessConfig {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

impl HarnessConfig {
    /// Load configuration from the environment
    ///
    /// Only `TEST_DB_URL` is read; the API origin and timeout keep their
    /// defaults unless overridden with the `ApiConfig` builders.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = HarnessConfig {
            api: ApiConfig::default(),
            database: DatabaseConfig::from_env(),
        };
        config.validate()?;

        Ok(config)
    }

    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

pub(crate) fn invalid(msg: impl Into<String>) -> HarnessError {
    HarnessError::configuration(msg)
}
