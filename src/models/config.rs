use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Runtime settings of the news service.
///
/// Loaded from `config/default.yaml`, then `config/{APP_ENV}.yaml` when it
/// exists, then `APP_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Page size of the filter endpoint when the request does not give one.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".into(),
            port: 5000,
            database_url: "app.db".into(),
            page_size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
